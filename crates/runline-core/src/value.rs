// Value detection: projection vs. posted market lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::projection::{round2, MatchupProjection};
use crate::stats::TeamId;

/// Minimum |model spread - market spread| (runs) that counts as value.
pub const SPREAD_THRESHOLD: f64 = 2.0;

/// Minimum |model total - market total| (runs) that counts as value.
pub const TOTAL_THRESHOLD: f64 = 3.0;

/// Slack for f64 subtraction error, so 1.9999999999999998 meets 2.0.
const GAP_EPSILON: f64 = 1e-9;

fn meets(gap: f64, threshold: f64) -> bool {
    gap.abs() >= threshold - GAP_EPSILON
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Inclusive thresholds for flagging a divergence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueThresholds {
    pub spread: f64,
    pub total: f64,
}

impl Default for ValueThresholds {
    fn default() -> Self {
        ValueThresholds {
            spread: SPREAD_THRESHOLD,
            total: TOTAL_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

/// A single flagged bet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Take `team` at `line` runs.
    Spread { team: TeamId, line: f64 },
    Over { line: f64 },
    Under { line: f64 },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Spread { team, line } => {
                write!(f, "Value on {} spread {}", team, format_line(*line))
            }
            Recommendation::Over { line } => write!(f, "Value on OVER {}", format_line(*line)),
            Recommendation::Under { line } => write!(f, "Value on UNDER {}", format_line(*line)),
        }
    }
}

/// Market numbers always show at least one decimal (`8.0`, `-1.5`).
fn format_line(line: f64) -> String {
    // Negating a pick'em line yields -0.0; show it as 0.0.
    let line = if line == 0.0 { 0.0 } else { line };
    if line.fract() == 0.0 {
        format!("{line:.1}")
    } else {
        format!("{line}")
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Model-minus-market gaps and any resulting recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAssessment {
    pub spread_value: f64,
    pub total_value: f64,
    /// Spread recommendation (if any) first, then total.
    pub recommendations: Vec<Recommendation>,
}

impl ValueAssessment {
    pub fn has_value(&self) -> bool {
        !self.recommendations.is_empty()
    }

    /// Recommendations rendered as display strings, in order.
    pub fn messages(&self) -> Vec<String> {
        self.recommendations.iter().map(ToString::to_string).collect()
    }
}

/// Compare a projection to the market.
///
/// `market_spread` is the number of runs added to the home side to make the
/// game even (positive means the home team is the underdog). Thresholds are
/// inclusive and checked against the unrounded gaps; the reported values are
/// rounded to 2 decimal places.
pub fn evaluate(
    projection: &MatchupProjection,
    home: &TeamId,
    away: &TeamId,
    market_spread: f64,
    market_total: f64,
    thresholds: &ValueThresholds,
) -> ValueAssessment {
    let spread_gap = projection.projected_spread - market_spread;
    let total_gap = projection.projected_total - market_total;

    let mut recommendations = Vec::with_capacity(2);

    if meets(spread_gap, thresholds.spread) {
        let rec = if spread_gap > 0.0 {
            Recommendation::Spread {
                team: home.clone(),
                line: market_spread,
            }
        } else {
            Recommendation::Spread {
                team: away.clone(),
                line: -market_spread,
            }
        };
        recommendations.push(rec);
    }

    if meets(total_gap, thresholds.total) {
        let rec = if total_gap > 0.0 {
            Recommendation::Over { line: market_total }
        } else {
            Recommendation::Under { line: market_total }
        };
        recommendations.push(rec);
    }

    let spread_value = round2(spread_gap);
    let total_value = round2(total_gap);

    ValueAssessment {
        spread_value,
        total_value,
        recommendations,
    }
}
