// HTTP CSV provider: downloads the season tables from configured URLs.
//
// One GET per table, no retry. A non-2xx status, timeout, or body that does
// not parse fails the fetch.

use std::time::Duration;

use async_trait::async_trait;
use runline_core::SeasonTables;
use tracing::debug;

use crate::provider::{expand_season, ProviderError, StatsProvider};
use crate::tables::{parse_batting, parse_pitching};

const USER_AGENT: &str = concat!("runline/", env!("CARGO_PKG_VERSION"));

/// Fetches batting and pitching CSV from URL templates containing `{season}`.
pub struct HttpCsvProvider {
    http: reqwest::Client,
    batting_url: String,
    pitching_url: String,
}

impl HttpCsvProvider {
    pub fn new(
        batting_url: impl Into<String>,
        pitching_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::Client)?;
        Ok(HttpCsvProvider {
            http,
            batting_url: batting_url.into(),
            pitching_url: pitching_url.into(),
        })
    }

    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        debug!("GET {}", url);
        let http_err = |source| ProviderError::Http {
            url: url.to_string(),
            source,
        };
        self.http
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(http_err)?
            .text()
            .await
            .map_err(http_err)
    }
}

#[async_trait]
impl StatsProvider for HttpCsvProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_season(&self, season: i32) -> Result<SeasonTables, ProviderError> {
        let batting = self.get_text(&expand_season(&self.batting_url, season)).await?;
        let pitching = self.get_text(&expand_season(&self.pitching_url, season)).await?;

        Ok(SeasonTables {
            season,
            batting: parse_batting(batting.as_bytes())?,
            pitching: parse_pitching(pitching.as_bytes())?,
        })
    }
}
