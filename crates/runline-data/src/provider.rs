// Provider trait, provider errors, and the fetch -> engine hand-off.

use async_trait::async_trait;
use runline_core::{AnalysisError, Engine, SeasonTables};
use thiserror::Error;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {table} table: {source}")]
    Csv {
        table: &'static str,
        source: csv::Error,
    },

    #[error("{table} table is missing column `{column}`")]
    MissingColumn { table: &'static str, column: String },

    #[error("malformed {table} table: {message}")]
    Malformed { table: &'static str, message: String },
}

impl From<ProviderError> for AnalysisError {
    fn from(err: ProviderError) -> Self {
        AnalysisError::DataUnavailable(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// A source of season batting and pitching tables.
///
/// Implementations either return both complete tables or an error; they
/// never return partial data and never retry.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    async fn fetch_season(&self, season: i32) -> Result<SeasonTables, ProviderError>;
}

/// Substitute `{season}` in a path or URL template.
pub fn expand_season(template: &str, season: i32) -> String {
    template.replace("{season}", &season.to_string())
}

/// Fetch `season` from `provider` and load it into `engine`.
///
/// On failure the engine is marked unavailable (so later lookups report
/// `DataUnavailable`) and the same error is returned.
pub async fn refresh_engine(
    engine: &mut Engine,
    provider: &dyn StatsProvider,
    season: i32,
) -> Result<usize, AnalysisError> {
    info!("Fetching {} team stats from {}", season, provider.name());
    match provider.fetch_season(season).await {
        Ok(tables) => {
            info!(
                "Fetched {} batting rows, {} pitching rows",
                tables.batting.len(),
                tables.pitching.len()
            );
            Ok(engine.load_season(&tables))
        }
        Err(e) => {
            warn!("fetch from {} failed: {}", provider.name(), e);
            let reason = e.to_string();
            engine.mark_unavailable(reason.clone());
            Err(AnalysisError::DataUnavailable(reason))
        }
    }
}
