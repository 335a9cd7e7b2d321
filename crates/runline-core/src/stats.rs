// Team stat bundles and the in-memory store that holds them for one session.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Team identifier
// ---------------------------------------------------------------------------

/// Team code such as `NYY`. Always stored trimmed and uppercased, so lookups
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    pub fn new(code: &str) -> Self {
        TeamId(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TeamId {
    fn from(code: &str) -> Self {
        TeamId::new(code)
    }
}

impl From<String> for TeamId {
    fn from(code: String) -> Self {
        TeamId::new(&code)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Season table rows (as delivered by a stats provider)
// ---------------------------------------------------------------------------

/// One team's row from a season batting table.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingLine {
    pub team: TeamId,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
}

/// One team's row from a season pitching table.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchingLine {
    pub team: TeamId,
    pub era: f64,
    pub whip: f64,
    pub so9: f64,
    pub bb9: f64,
}

/// Batting and pitching tables for a single season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTables {
    pub season: i32,
    pub batting: Vec<BattingLine>,
    pub pitching: Vec<PitchingLine>,
}

// ---------------------------------------------------------------------------
// TeamStats
// ---------------------------------------------------------------------------

/// Offensive and pitching metrics for one team.
///
/// Records are never edited in place; an update replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub team: TeamId,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
    pub era: f64,
    pub whip: f64,
    /// Strikeouts per nine. Only present for fetched stats.
    pub so9: Option<f64>,
    /// Walks per nine. Only present for fetched stats.
    pub bb9: Option<f64>,
}

impl TeamStats {
    /// Build a hand-entered record. OPS is derived as OBP + SLG and no range
    /// checks are applied.
    pub fn manual(team: TeamId, avg: f64, obp: f64, slg: f64, era: f64, whip: f64) -> Self {
        TeamStats {
            team,
            avg,
            obp,
            slg,
            ops: obp + slg,
            era,
            whip,
            so9: None,
            bb9: None,
        }
    }

    /// Join a batting row and a pitching row for the same team. The table's
    /// own OPS is kept as published.
    pub fn from_lines(batting: &BattingLine, pitching: &PitchingLine) -> Self {
        TeamStats {
            team: batting.team.clone(),
            avg: batting.avg,
            obp: batting.obp,
            slg: batting.slg,
            ops: batting.ops,
            era: pitching.era,
            whip: pitching.whip,
            so9: Some(pitching.so9),
            bb9: Some(pitching.bb9),
        }
    }
}

// ---------------------------------------------------------------------------
// TeamStatStore
// ---------------------------------------------------------------------------

/// Authoritative set of team stat bundles for the current analysis session.
#[derive(Debug, Clone, Default)]
pub struct TeamStatStore {
    teams: HashMap<TeamId, TeamStats>,
}

impl TeamStatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, replacing any previous one for the same team.
    /// Returns the replaced record, if any.
    pub fn upsert(&mut self, stats: TeamStats) -> Option<TeamStats> {
        debug!(team = %stats.team, ops = stats.ops, era = stats.era, whip = stats.whip, "upserting team stats");
        self.teams.insert(stats.team.clone(), stats)
    }

    /// Hand-entry path: `upsert` with OPS computed from OBP + SLG.
    pub fn add_manual(&mut self, team: &str, avg: f64, obp: f64, slg: f64, era: f64, whip: f64) {
        self.upsert(TeamStats::manual(TeamId::new(team), avg, obp, slg, era, whip));
    }

    pub fn get(&self, team: &TeamId) -> Result<&TeamStats, AnalysisError> {
        self.teams
            .get(team)
            .ok_or_else(|| AnalysisError::UnknownTeam(team.clone()))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team codes in sorted order.
    pub fn team_ids(&self) -> Vec<&TeamId> {
        let mut ids: Vec<&TeamId> = self.teams.keys().collect();
        ids.sort();
        ids
    }

    /// Build a store from a season's batting and pitching tables.
    ///
    /// Teams are matched by code. A team that appears in only one table is
    /// left out; a team listed twice keeps its last row.
    pub fn from_tables(tables: &SeasonTables) -> Self {
        let mut batting: HashMap<&TeamId, &BattingLine> = HashMap::new();
        for line in &tables.batting {
            if batting.insert(&line.team, line).is_some() {
                warn!("duplicate batting row for '{}', using latest value", line.team);
            }
        }

        let mut pitching: HashMap<&TeamId, &PitchingLine> = HashMap::new();
        for line in &tables.pitching {
            if pitching.insert(&line.team, line).is_some() {
                warn!("duplicate pitching row for '{}', using latest value", line.team);
            }
        }

        let mut store = TeamStatStore::new();
        for (team, bat) in &batting {
            match pitching.get(team) {
                Some(pitch) => {
                    store.upsert(TeamStats::from_lines(bat, pitch));
                }
                None => warn!("skipping team '{}': no pitching row for season {}", team, tables.season),
            }
        }
        for team in pitching.keys().filter(|team| !batting.contains_key(*team)) {
            warn!("skipping team '{}': no batting row for season {}", team, tables.season);
        }

        store
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
