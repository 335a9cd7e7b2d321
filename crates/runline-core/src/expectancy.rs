// Run expectancy: one team's stat bundle to an expected-runs scalar.

use serde::{Deserialize, Serialize};

use crate::stats::TeamStats;

/// OPS multiplier for the linear policy.
pub const OPS_LINEAR_FACTOR: f64 = 5.5;

/// OPS multiplier for the OPS+WHIP policy.
pub const OPS_FACTOR: f64 = 4.5;

/// Weight applied to `(1 - WHIP)` in the OPS+WHIP policy.
pub const WHIP_FACTOR: f64 = 2.0;

/// Bounds applied by the OPS+WHIP policy.
pub const MIN_EXPECTED_RUNS: f64 = 2.0;
pub const MAX_EXPECTED_RUNS: f64 = 8.0;

/// How a team's expected runs are derived from its stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectancyPolicy {
    /// `OPS * 5.5`, unbounded.
    OpsLinear,
    /// `OPS * 4.5 + (1 - WHIP) * 2.0`, clamped to `[2, 8]`.
    OpsWhipClamped,
}

impl ExpectancyPolicy {
    pub fn expected_runs(self, stats: &TeamStats) -> f64 {
        match self {
            ExpectancyPolicy::OpsLinear => ops_linear(stats.ops),
            ExpectancyPolicy::OpsWhipClamped => ops_whip_clamped(stats.ops, stats.whip),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpectancyPolicy::OpsLinear => "ops_linear",
            ExpectancyPolicy::OpsWhipClamped => "ops_whip_clamped",
        }
    }
}

pub fn ops_linear(ops: f64) -> f64 {
    ops * OPS_LINEAR_FACTOR
}

pub fn ops_whip_clamped(ops: f64, whip: f64) -> f64 {
    let raw = ops * OPS_FACTOR + (1.0 - whip) * WHIP_FACTOR;
    // f64::max discards NaN, so a NaN input lands on the floor.
    raw.max(MIN_EXPECTED_RUNS).min(MAX_EXPECTED_RUNS)
}
