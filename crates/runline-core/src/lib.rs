// Library root for the projection engine: team stat store, run expectancy,
// matchup projection, and market value detection.

pub mod engine;
pub mod error;
pub mod expectancy;
pub mod projection;
pub mod stats;
pub mod value;

pub use engine::{DataSource, Engine, EngineSettings};
pub use error::AnalysisError;
pub use expectancy::ExpectancyPolicy;
pub use projection::{MatchupProjection, ProjectionMethod};
pub use stats::{BattingLine, PitchingLine, SeasonTables, TeamId, TeamStatStore, TeamStats};
pub use value::{Recommendation, ValueAssessment, ValueThresholds};
