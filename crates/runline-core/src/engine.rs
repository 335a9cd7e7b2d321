// Analysis engine: owns the session's team stat store and runs the
// store -> expectancy -> projection -> value pipeline.

use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::expectancy::ExpectancyPolicy;
use crate::projection::{self, MatchupProjection, ProjectionMethod};
use crate::stats::{SeasonTables, TeamId, TeamStatStore, TeamStats};
use crate::value::{self, ValueAssessment, ValueThresholds};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Model configuration for one engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub expectancy: ExpectancyPolicy,
    pub projection: ProjectionMethod,
    pub thresholds: ValueThresholds,
}

impl EngineSettings {
    /// Preset for hand-entered stats: OPS+WHIP clamped, no opponent adjustment.
    pub fn manual() -> Self {
        EngineSettings {
            expectancy: ExpectancyPolicy::OpsWhipClamped,
            projection: ProjectionMethod::Direct,
            thresholds: ValueThresholds::default(),
        }
    }

    /// Preset for fetched season tables: linear OPS, opponent-adjusted.
    pub fn fetched() -> Self {
        EngineSettings {
            expectancy: ExpectancyPolicy::OpsLinear,
            projection: ProjectionMethod::OpponentAdjusted,
            thresholds: ValueThresholds::default(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::manual()
    }
}

// ---------------------------------------------------------------------------
// Data source state
// ---------------------------------------------------------------------------

/// Where the store's contents came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Hand-entered via `add_team_stats`.
    Manual,
    /// Loaded from a provider's tables for the given season.
    Season(i32),
    /// The last fetch failed; no projection is possible until stats are
    /// loaded again.
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// One analysis session. All analysis reads are `&self`; loading stats takes
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct Engine {
    settings: EngineSettings,
    store: TeamStatStore,
    source: DataSource,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Engine {
            settings,
            store: TeamStatStore::new(),
            source: DataSource::Manual,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn store(&self) -> &TeamStatStore {
        &self.store
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Add or replace a team's hand-entered stats. OPS is OBP + SLG.
    ///
    /// Entering stats after a failed fetch switches the session to manual
    /// data.
    pub fn add_team_stats(&mut self, team: &str, avg: f64, obp: f64, slg: f64, era: f64, whip: f64) {
        if let DataSource::Unavailable(_) = self.source {
            info!("switching to manually entered team stats");
            self.source = DataSource::Manual;
        }
        self.store.add_manual(team, avg, obp, slg, era, whip);
    }

    /// Replace the store with a season's tables. Returns the number of teams
    /// that could be paired across both tables.
    pub fn load_season(&mut self, tables: &SeasonTables) -> usize {
        self.store = TeamStatStore::from_tables(tables);
        self.source = DataSource::Season(tables.season);
        info!("Loaded {} teams for season {}", self.store.len(), tables.season);
        self.store.len()
    }

    /// Record a failed fetch. Any previously loaded stats are dropped so no
    /// stale or partial data is used.
    pub fn mark_unavailable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("team statistics unavailable: {}", reason);
        self.store = TeamStatStore::new();
        self.source = DataSource::Unavailable(reason);
    }

    /// Look up a team's stats, distinguishing a failed fetch from a missing
    /// team.
    pub fn team(&self, team: &str) -> Result<&TeamStats, AnalysisError> {
        if let DataSource::Unavailable(reason) = &self.source {
            return Err(AnalysisError::DataUnavailable(reason.clone()));
        }
        self.store.get(&TeamId::new(team))
    }

    /// Expected runs for one team under the configured policy.
    pub fn expected_runs(&self, team: &str) -> Result<f64, AnalysisError> {
        let stats = self.team(team)?;
        Ok(self.settings.expectancy.expected_runs(stats))
    }

    /// Project a game. Fails with `UnknownTeam` if either side is missing,
    /// or `DataUnavailable` if the session's fetch failed.
    pub fn analyze_matchup(&self, home_team: &str, away_team: &str) -> Result<MatchupProjection, AnalysisError> {
        let home = self.team(home_team)?;
        let away = self.team(away_team)?;

        let projection = projection::project(home, away, self.settings.expectancy, self.settings.projection);
        debug!(
            home = %home.team,
            away = %away.team,
            home_projected = projection.home_projected,
            away_projected = projection.away_projected,
            "projected matchup"
        );
        Ok(projection)
    }

    /// Compare an existing projection to market lines using the configured
    /// thresholds.
    pub fn assess(
        &self,
        projection: &MatchupProjection,
        home_team: &str,
        away_team: &str,
        market_spread: f64,
        market_total: f64,
    ) -> ValueAssessment {
        value::evaluate(
            projection,
            &TeamId::new(home_team),
            &TeamId::new(away_team),
            market_spread,
            market_total,
            &self.settings.thresholds,
        )
    }

    /// Project a game and compare it to the market.
    pub fn find_value(
        &self,
        home_team: &str,
        away_team: &str,
        market_spread: f64,
        market_total: f64,
    ) -> Result<ValueAssessment, AnalysisError> {
        let projection = self.analyze_matchup(home_team, away_team)?;
        Ok(self.assess(&projection, home_team, away_team, market_spread, market_total))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
