// Configuration loading and parsing (engine.toml, slate.toml).

use std::path::{Path, PathBuf};

use chrono::Datelike;
use runline_core::{EngineSettings, ExpectancyPolicy, ProjectionMethod, TeamId, ValueThresholds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub engine: EngineSettings,
    pub market_bounds: MarketBounds,
    pub output: OutputFormat,
    pub source: SourceConfig,
    pub teams: Vec<ManualTeam>,
    pub matchups: Vec<Matchup>,
}

// ---------------------------------------------------------------------------
// engine.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
struct EngineFile {
    #[serde(default)]
    model: ModelSection,
    #[serde(default)]
    thresholds: ValueThresholds,
    #[serde(default)]
    market_bounds: MarketBounds,
    #[serde(default)]
    output: OutputSection,
}

/// Policy overrides. Anything left unset follows the data source preset.
#[derive(Debug, Clone, Default, Deserialize)]
struct ModelSection {
    expectancy: Option<ExpectancyPolicy>,
    projection: Option<ProjectionMethod>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputSection {
    #[serde(default)]
    format: OutputFormat,
}

/// Accepted range for posted market lines. Matchups outside it are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketBounds {
    pub spread_min: f64,
    pub spread_max: f64,
    pub total_min: f64,
    pub total_max: f64,
}

impl Default for MarketBounds {
    fn default() -> Self {
        MarketBounds {
            spread_min: -20.0,
            spread_max: 20.0,
            total_min: 5.0,
            total_max: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// slate.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct SlateFile {
    source: SourceConfig,
    #[serde(default)]
    teams: Vec<ManualTeam>,
    #[serde(default)]
    matchups: Vec<Matchup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Manual,
    Csv,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Season to fetch. Defaults to the current calendar year.
    #[serde(default)]
    pub season: Option<i32>,
    /// Batting table path (csv) or URL (http). `{season}` is substituted.
    #[serde(default)]
    pub batting: Option<String>,
    /// Pitching table path (csv) or URL (http). `{season}` is substituted.
    #[serde(default)]
    pub pitching: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SourceConfig {
    pub fn manual() -> Self {
        SourceConfig {
            kind: SourceKind::Manual,
            season: None,
            batting: None,
            pitching: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn season(&self) -> i32 {
        self.season.unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// One `[[teams]]` entry for manual stat entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualTeam {
    pub team: String,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub era: f64,
    pub whip: f64,
}

/// One `[[matchups]]` entry: a game and its posted lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
    /// Runs added to the home side; positive means home is the underdog.
    pub market_spread: f64,
    pub market_total: f64,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Pick the engine preset for the data source, then apply overrides.
fn engine_settings(model: &ModelSection, thresholds: ValueThresholds, kind: SourceKind) -> EngineSettings {
    let preset = match kind {
        SourceKind::Manual => EngineSettings::manual(),
        SourceKind::Csv | SourceKind::Http => EngineSettings::fetched(),
    };
    EngineSettings {
        expectancy: model.expectancy.unwrap_or(preset.expectancy),
        projection: model.projection.unwrap_or(preset.projection),
        thresholds,
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/engine.toml` and `config/slate.toml` relative
/// to `base_dir`. Does not copy defaults; see `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    let engine_path = config_dir.join("engine.toml");
    let engine_file: EngineFile = parse_file(&engine_path)?;

    let slate_path = config_dir.join("slate.toml");
    let slate_file: SlateFile = parse_file(&slate_path)?;

    let config = Config {
        engine: engine_settings(&engine_file.model, engine_file.thresholds, slate_file.source.kind),
        market_bounds: engine_file.market_bounds,
        output: engine_file.output.format,
        source: slate_file.source,
        teams: slate_file.teams,
        matchups: slate_file.matchups,
    };

    validate(&config)?;

    Ok(config)
}

/// Copy any file in `defaults/` that is missing from `config/`. Returns the
/// files that were copied. `*.example` templates are never copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        if !config_dir.is_dir() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("no defaults/ or config/ directory in {}", base_dir.display()),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| ConfigError::DefaultsCopyError {
                message: format!("failed to read defaults entry: {e}"),
            })?
            .path();

        let Some(file_name) = path.file_name() else {
            continue;
        };
        if !path.is_file() || file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }

        let target = config_dir.join(file_name);
        if copy_if_missing(&path, &target)? {
            copied.push(target);
        }
    }

    Ok(copied)
}

/// Loads config relative to the current working directory, copying
/// defaults first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy `src` to `dest` unless `dest` already exists. Returns whether a copy
/// happened.
fn copy_if_missing(src: &Path, dest: &Path) -> Result<bool, ConfigError> {
    // Claim the target first; an existing file is left untouched.
    match std::fs::OpenOptions::new().write(true).create_new(true).open(dest) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("failed to create {}: {e}", dest.display()),
            })
        }
    }
    std::fs::copy(src, dest).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {} to {}: {e}", src.display(), dest.display()),
    })?;
    Ok(true)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    // Thresholds
    let t = &config.engine.thresholds;
    for (field, value) in [("thresholds.spread", t.spread), ("thresholds.total", t.total)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid(field, format!("must be a finite number > 0, got {value}")));
        }
    }

    // Market bounds
    let b = &config.market_bounds;
    if !(b.spread_min < b.spread_max) {
        return Err(invalid(
            "market_bounds.spread_min",
            format!("must be less than spread_max ({} >= {})", b.spread_min, b.spread_max),
        ));
    }
    if !(b.total_min < b.total_max) {
        return Err(invalid(
            "market_bounds.total_min",
            format!("must be less than total_max ({} >= {})", b.total_min, b.total_max),
        ));
    }

    // Source
    let source = &config.source;
    match source.kind {
        SourceKind::Manual => {
            if config.teams.is_empty() {
                return Err(invalid("teams", "manual source needs at least one [[teams]] entry"));
            }
        }
        SourceKind::Csv | SourceKind::Http => {
            if source.batting.as_deref().map_or(true, str::is_empty) {
                return Err(invalid("source.batting", "required for csv and http sources"));
            }
            if source.pitching.as_deref().map_or(true, str::is_empty) {
                return Err(invalid("source.pitching", "required for csv and http sources"));
            }
            if source.kind == SourceKind::Http && source.timeout_secs == 0 {
                return Err(invalid("source.timeout_secs", "must be > 0"));
            }
        }
    }

    for (i, team) in config.teams.iter().enumerate() {
        if TeamId::new(&team.team).is_empty() {
            return Err(invalid(format!("teams[{i}].team"), "must not be empty"));
        }
    }

    // Matchups
    if config.matchups.is_empty() {
        return Err(invalid("matchups", "at least one [[matchups]] entry is required"));
    }
    for (i, m) in config.matchups.iter().enumerate() {
        let home = TeamId::new(&m.home);
        let away = TeamId::new(&m.away);
        if home.is_empty() {
            return Err(invalid(format!("matchups[{i}].home"), "must not be empty"));
        }
        if away.is_empty() {
            return Err(invalid(format!("matchups[{i}].away"), "must not be empty"));
        }
        if home == away {
            return Err(invalid(
                format!("matchups[{i}].away"),
                format!("must differ from home team {home}"),
            ));
        }
        if !(b.spread_min..=b.spread_max).contains(&m.market_spread) {
            return Err(invalid(
                format!("matchups[{i}].market_spread"),
                format!(
                    "must be between {} and {}, got {}",
                    b.spread_min, b.spread_max, m.market_spread
                ),
            ));
        }
        if !(b.total_min..=b.total_max).contains(&m.market_total) {
            return Err(invalid(
                format!("matchups[{i}].market_total"),
                format!(
                    "must be between {} and {}, got {}",
                    b.total_min, b.total_max, m.market_total
                ),
            ));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const REQUIRED_FILES: [&str; 2] = ["engine.toml", "slate.toml"];

    /// Helper: returns the runline-app crate root (works whether `cargo test`
    /// runs from the crate root or the workspace root).
    fn project_root() -> PathBuf {
        let cwd = std::env::current_dir().unwrap();
        if cwd.join("defaults").exists() {
            cwd
        } else if cwd.join("crates/runline-app/defaults").exists() {
            cwd.join("crates/runline-app")
        } else {
            panic!("Cannot locate defaults/ directory from CWD {:?}", cwd);
        }
    }

    /// Fresh temp dir with `config/` populated from the crate defaults.
    fn tmp_with_defaults(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        let config_dir = tmp.join("config");
        fs::create_dir_all(&config_dir).unwrap();

        let root = project_root();
        for file in REQUIRED_FILES {
            fs::copy(root.join("defaults").join(file), config_dir.join(file)).unwrap();
        }
        tmp
    }

    fn write_slate(tmp: &Path, text: &str) {
        fs::write(tmp.join("config/slate.toml"), text).unwrap();
    }

    fn expect_field(err: ConfigError, expected: &str) {
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, expected),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn load_valid_config_from_defaults() {
        let tmp = tmp_with_defaults("runline_config_defaults");
        let config = load_config_from(&tmp).expect("should load default config");

        assert_eq!(config.source.kind, SourceKind::Manual);
        assert_eq!(config.engine, EngineSettings::manual());
        assert_eq!(config.market_bounds, MarketBounds::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.teams.len(), 2);
        assert_eq!(config.teams[0].team, "NYY");
        assert!((config.teams[1].whip - 1.28).abs() < f64::EPSILON);
        assert_eq!(
            config.matchups,
            vec![Matchup {
                home: "NYY".into(),
                away: "BOS".into(),
                market_spread: -1.5,
                market_total: 8.5,
            }]
        );

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn csv_source_selects_fetched_preset() {
        let tmp = tmp_with_defaults("runline_config_csv_preset");
        write_slate(
            &tmp,
            r#"
[source]
kind = "csv"
season = 2024
batting = "data/{season}/batting.csv"
pitching = "data/{season}/pitching.csv"

[[matchups]]
home = "NYY"
away = "BOS"
market_spread = -1.5
market_total = 8.5
"#,
        );

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.engine.expectancy, ExpectancyPolicy::OpsLinear);
        assert_eq!(config.engine.projection, ProjectionMethod::OpponentAdjusted);
        assert_eq!(config.source.season(), 2024);
        assert_eq!(config.source.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.teams.is_empty());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn model_overrides_apply_over_preset() {
        let tmp = tmp_with_defaults("runline_config_model_override");
        fs::write(
            tmp.join("config/engine.toml"),
            r#"
[model]
projection = "opponent_adjusted"

[thresholds]
spread = 1.5

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.engine.expectancy, ExpectancyPolicy::OpsWhipClamped);
        assert_eq!(config.engine.projection, ProjectionMethod::OpponentAdjusted);
        assert!((config.engine.thresholds.spread - 1.5).abs() < f64::EPSILON);
        assert!((config.engine.thresholds.total - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.output, OutputFormat::Json);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn season_defaults_to_current_year() {
        let source = SourceConfig::manual();
        assert_eq!(source.season(), chrono::Local::now().year());
    }

    #[test]
    fn rejects_unknown_policy_name() {
        let tmp = tmp_with_defaults("runline_config_bad_policy");
        fs::write(tmp.join("config/engine.toml"), "[model]\nexpectancy = \"ops_cubed\"\n").unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path.ends_with("engine.toml")));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_threshold() {
        let tmp = tmp_with_defaults("runline_config_zero_threshold");
        let text = fs::read_to_string(tmp.join("config/engine.toml")).unwrap();
        fs::write(tmp.join("config/engine.toml"), text.replace("total  = 3.0", "total  = 0.0")).unwrap();

        expect_field(load_config_from(&tmp).unwrap_err(), "thresholds.total");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_inverted_market_bounds() {
        let tmp = tmp_with_defaults("runline_config_inverted_bounds");
        let text = fs::read_to_string(tmp.join("config/engine.toml")).unwrap();
        fs::write(
            tmp.join("config/engine.toml"),
            text.replace("total_min  = 5.0", "total_min  = 25.0"),
        )
        .unwrap();

        expect_field(load_config_from(&tmp).unwrap_err(), "market_bounds.total_min");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_market_total_out_of_bounds() {
        let tmp = tmp_with_defaults("runline_config_total_bounds");
        let text = fs::read_to_string(tmp.join("config/slate.toml")).unwrap();
        write_slate(&tmp, &text.replace("market_total  = 8.5", "market_total  = 42.0"));

        expect_field(load_config_from(&tmp).unwrap_err(), "matchups[0].market_total");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_market_spread_out_of_bounds() {
        let tmp = tmp_with_defaults("runline_config_spread_bounds");
        let text = fs::read_to_string(tmp.join("config/slate.toml")).unwrap();
        write_slate(&tmp, &text.replace("market_spread = -1.5", "market_spread = -25.0"));

        expect_field(load_config_from(&tmp).unwrap_err(), "matchups[0].market_spread");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_team_playing_itself() {
        let tmp = tmp_with_defaults("runline_config_self_matchup");
        let text = fs::read_to_string(tmp.join("config/slate.toml")).unwrap();
        write_slate(&tmp, &text.replace("away          = \"BOS\"", "away          = \"nyy\""));

        expect_field(load_config_from(&tmp).unwrap_err(), "matchups[0].away");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_manual_source_without_teams() {
        let tmp = tmp_with_defaults("runline_config_no_teams");
        write_slate(
            &tmp,
            r#"
[source]
kind = "manual"

[[matchups]]
home = "NYY"
away = "BOS"
market_spread = -1.5
market_total = 8.5
"#,
        );

        expect_field(load_config_from(&tmp).unwrap_err(), "teams");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_csv_source_without_paths() {
        let tmp = tmp_with_defaults("runline_config_csv_no_paths");
        write_slate(
            &tmp,
            r#"
[source]
kind = "csv"
batting = "batting.csv"

[[matchups]]
home = "NYY"
away = "BOS"
market_spread = -1.5
market_total = 8.5
"#,
        );

        expect_field(load_config_from(&tmp).unwrap_err(), "source.pitching");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_slate() {
        let tmp = tmp_with_defaults("runline_config_empty_slate");
        let text = fs::read_to_string(tmp.join("config/slate.toml")).unwrap();
        let cut = text.find("[[matchups]]").unwrap();
        write_slate(&tmp, &text[..cut]);

        expect_field(load_config_from(&tmp).unwrap_err(), "matchups");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_slate_toml() {
        let tmp = tmp_with_defaults("runline_config_missing_slate");
        fs::remove_file(tmp.join("config/slate.toml")).unwrap();

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::FileNotFound { path } => assert!(path.ends_with("slate.toml")),
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = tmp_with_defaults("runline_config_invalid_toml");
        write_slate(&tmp, "this is not valid [[[ toml");

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with("slate.toml")),
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_copies_missing_and_skips_examples() {
        let tmp = std::env::temp_dir().join("runline_config_ensure_copies");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();

        let root = project_root();
        for file in REQUIRED_FILES {
            fs::copy(root.join("defaults").join(file), defaults_dir.join(file)).unwrap();
        }
        fs::write(defaults_dir.join("slate-http.toml.example"), "[source]\nkind = \"http\"\n").unwrap();

        let mut copied = ensure_config_files(&tmp).expect("should succeed");
        copied.sort();
        assert_eq!(copied.len(), 2);
        assert!(copied[0].ends_with("engine.toml"));
        assert!(copied[1].ends_with("slate.toml"));
        assert!(!tmp.join("config/slate-http.toml.example").exists());
        assert_eq!(
            fs::read_to_string(tmp.join("config/slate.toml")).unwrap(),
            fs::read_to_string(root.join("defaults/slate.toml")).unwrap()
        );

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_preserves_existing() {
        let tmp = std::env::temp_dir().join("runline_config_ensure_preserves");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        let config_dir = tmp.join("config");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();

        let root = project_root();
        for file in REQUIRED_FILES {
            fs::copy(root.join("defaults").join(file), defaults_dir.join(file)).unwrap();
        }
        fs::write(config_dir.join("slate.toml"), "# custom\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert_eq!(copied.len(), 1);
        assert!(copied[0].ends_with("engine.toml"));
        assert_eq!(fs::read_to_string(config_dir.join("slate.toml")).unwrap(), "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_when_both_dirs_missing() {
        let tmp = std::env::temp_dir().join("runline_config_both_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        match ensure_config_files(&tmp).unwrap_err() {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("no defaults/ or config/ directory"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
