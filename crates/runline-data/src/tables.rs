// Season table parsing.
//
// Reads team batting and pitching tables in CSV form. Only the columns the
// engine needs are read; everything else in the file is ignored. Any missing
// column, unparseable row, or non-finite value fails the whole table.

use std::io::Read;

use runline_core::{BattingLine, PitchingLine, TeamId};
use serde::Deserialize;

use crate::provider::ProviderError;

pub const BATTING_COLUMNS: [&str; 5] = ["Team", "AVG", "OBP", "SLG", "OPS"];
pub const PITCHING_COLUMNS: [&str; 5] = ["Team", "ERA", "WHIP", "SO9", "BB9"];

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawBattingRow {
    Team: String,
    AVG: f64,
    OBP: f64,
    SLG: f64,
    OPS: f64,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPitchingRow {
    Team: String,
    ERA: f64,
    WHIP: f64,
    SO9: f64,
    BB9: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr)
}

/// Fail with `MissingColumn` unless every required header is present.
fn require_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    table: &'static str,
    required: &[&str],
) -> Result<(), ProviderError> {
    let headers = reader
        .headers()
        .map_err(|source| ProviderError::Csv { table, source })?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(ProviderError::MissingColumn {
                table,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn team_id(raw: &str, table: &'static str, row: usize) -> Result<TeamId, ProviderError> {
    let team = TeamId::new(raw);
    if team.is_empty() {
        return Err(ProviderError::Malformed {
            table,
            message: format!("row {row} has an empty Team value"),
        });
    }
    Ok(team)
}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

/// Parse a team batting table. Team codes are uppercased.
pub fn parse_batting<R: Read>(rdr: R) -> Result<Vec<BattingLine>, ProviderError> {
    const TABLE: &str = "batting";
    let mut reader = reader(rdr);
    require_columns(&mut reader, TABLE, &BATTING_COLUMNS)?;

    let mut lines = Vec::new();
    for (i, result) in reader.deserialize::<RawBattingRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| ProviderError::Csv { table: TABLE, source })?;
        if !all_finite(&[raw.AVG, raw.OBP, raw.SLG, raw.OPS]) {
            return Err(ProviderError::Malformed {
                table: TABLE,
                message: format!("non-finite value for team '{}' (row {row})", raw.Team),
            });
        }
        lines.push(BattingLine {
            team: team_id(&raw.Team, TABLE, row)?,
            avg: raw.AVG,
            obp: raw.OBP,
            slg: raw.SLG,
            ops: raw.OPS,
        });
    }

    if lines.is_empty() {
        return Err(ProviderError::Malformed {
            table: TABLE,
            message: "table has zero rows".into(),
        });
    }
    Ok(lines)
}

/// Parse a team pitching table. Team codes are uppercased.
pub fn parse_pitching<R: Read>(rdr: R) -> Result<Vec<PitchingLine>, ProviderError> {
    const TABLE: &str = "pitching";
    let mut reader = reader(rdr);
    require_columns(&mut reader, TABLE, &PITCHING_COLUMNS)?;

    let mut lines = Vec::new();
    for (i, result) in reader.deserialize::<RawPitchingRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| ProviderError::Csv { table: TABLE, source })?;
        if !all_finite(&[raw.ERA, raw.WHIP, raw.SO9, raw.BB9]) {
            return Err(ProviderError::Malformed {
                table: TABLE,
                message: format!("non-finite value for team '{}' (row {row})", raw.Team),
            });
        }
        lines.push(PitchingLine {
            team: team_id(&raw.Team, TABLE, row)?,
            era: raw.ERA,
            whip: raw.WHIP,
            so9: raw.SO9,
            bb9: raw.BB9,
        });
    }

    if lines.is_empty() {
        return Err(ProviderError::Malformed {
            table: TABLE,
            message: "table has zero rows".into(),
        });
    }
    Ok(lines)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
