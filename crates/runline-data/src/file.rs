// Local CSV provider: reads the season tables from disk.

use std::path::Path;

use async_trait::async_trait;
use runline_core::SeasonTables;
use tracing::debug;

use crate::provider::{expand_season, ProviderError, StatsProvider};
use crate::tables::{parse_batting, parse_pitching};

/// Reads `batting` and `pitching` CSV files. Paths may contain `{season}`.
#[derive(Debug, Clone)]
pub struct CsvFileProvider {
    batting: String,
    pitching: String,
}

impl CsvFileProvider {
    pub fn new(batting: impl Into<String>, pitching: impl Into<String>) -> Self {
        CsvFileProvider {
            batting: batting.into(),
            pitching: pitching.into(),
        }
    }
}

async fn read_file(path: &str) -> Result<Vec<u8>, ProviderError> {
    debug!("reading {}", path);
    tokio::fs::read(Path::new(path))
        .await
        .map_err(|source| ProviderError::Io {
            path: path.to_string(),
            source,
        })
}

#[async_trait]
impl StatsProvider for CsvFileProvider {
    fn name(&self) -> &str {
        "csv files"
    }

    async fn fetch_season(&self, season: i32) -> Result<SeasonTables, ProviderError> {
        let batting = read_file(&expand_season(&self.batting, season)).await?;
        let pitching = read_file(&expand_season(&self.pitching, season)).await?;

        Ok(SeasonTables {
            season,
            batting: parse_batting(batting.as_slice())?,
            pitching: parse_pitching(pitching.as_slice())?,
        })
    }
}
