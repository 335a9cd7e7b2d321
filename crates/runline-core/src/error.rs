// Failure kinds surfaced by the engine's caller-facing API.

use thiserror::Error;

use crate::stats::TeamId;

/// Why a matchup could not be projected.
///
/// "Team not found" and "data source unreachable" are kept apart so callers
/// can tell the user which one happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("team not found: {0}")]
    UnknownTeam(TeamId),

    #[error("team statistics unavailable: {0}")]
    DataUnavailable(String),
}

impl AnalysisError {
    /// Short machine-friendly label for reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::UnknownTeam(_) => "unknown_team",
            AnalysisError::DataUnavailable(_) => "data_unavailable",
        }
    }
}
