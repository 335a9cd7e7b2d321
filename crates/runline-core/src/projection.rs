// Matchup projection: two teams' expectancies to projected scores, spread,
// and total.

use serde::{Deserialize, Serialize};

use crate::expectancy::ExpectancyPolicy;
use crate::stats::TeamStats;

/// How the two sides' expected runs are combined into projected scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMethod {
    /// Each side scores its own expected runs.
    Direct,
    /// Each side scores the mean of its expected runs and the runs the
    /// opponent's staff allows.
    OpponentAdjusted,
}

impl ProjectionMethod {
    pub fn label(self) -> &'static str {
        match self {
            ProjectionMethod::Direct => "direct",
            ProjectionMethod::OpponentAdjusted => "opponent_adjusted",
        }
    }
}

/// Projected score line for one game.
///
/// Both scores are held at 2 decimal places, and spread and total are always
/// derived from those two stored scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchupProjection {
    pub home_projected: f64,
    pub away_projected: f64,
    pub projected_spread: f64,
    pub projected_total: f64,
}

impl MatchupProjection {
    pub fn from_scores(home: f64, away: f64) -> Self {
        let home = round2(home);
        let away = round2(away);
        MatchupProjection {
            home_projected: home,
            away_projected: away,
            projected_spread: round2(home - away),
            projected_total: round2(home + away),
        }
    }
}

/// Runs a staff allows per game. ERA is already per nine innings, so this is
/// ERA itself.
pub fn runs_allowed(era: f64) -> f64 {
    era / 9.0 * 9.0
}

/// Project a game between `home` and `away`.
pub fn project(
    home: &TeamStats,
    away: &TeamStats,
    policy: ExpectancyPolicy,
    method: ProjectionMethod,
) -> MatchupProjection {
    let home_expected = policy.expected_runs(home);
    let away_expected = policy.expected_runs(away);

    let (home_score, away_score) = match method {
        ProjectionMethod::Direct => (home_expected, away_expected),
        ProjectionMethod::OpponentAdjusted => (
            (home_expected + runs_allowed(away.era)) / 2.0,
            (away_expected + runs_allowed(home.era)) / 2.0,
        ),
    };

    MatchupProjection::from_scores(home_score, away_score)
}

/// Round half away from zero to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
