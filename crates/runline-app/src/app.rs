// Session orchestration: build the engine from config, load team stats,
// and evaluate every matchup on the slate.

use std::time::Duration;

use anyhow::Context;
use runline_core::{AnalysisError, Engine, MatchupProjection, ValueAssessment};
use runline_data::{refresh_engine, CsvFileProvider, HttpCsvProvider, StatsProvider};
use tracing::{info, warn};

use crate::config::{Config, Matchup, SourceConfig, SourceKind};

/// A successful projection and its comparison to the market.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub projection: MatchupProjection,
    pub assessment: ValueAssessment,
}

/// Result for one slate entry. Failures are carried, not propagated, so one
/// bad matchup does not stop the rest of the slate.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupOutcome {
    pub matchup: Matchup,
    pub result: Result<Evaluation, AnalysisError>,
}

fn table_paths(source: &SourceConfig) -> anyhow::Result<(&str, &str)> {
    let batting = source
        .batting
        .as_deref()
        .context("source.batting is required")?;
    let pitching = source
        .pitching
        .as_deref()
        .context("source.pitching is required")?;
    Ok((batting, pitching))
}

/// Build the stats provider for a fetched source. `None` for manual entry.
pub fn build_provider(source: &SourceConfig) -> anyhow::Result<Option<Box<dyn StatsProvider>>> {
    let provider: Box<dyn StatsProvider> = match source.kind {
        SourceKind::Manual => return Ok(None),
        SourceKind::Csv => {
            let (batting, pitching) = table_paths(source)?;
            Box::new(CsvFileProvider::new(batting, pitching))
        }
        SourceKind::Http => {
            let (batting, pitching) = table_paths(source)?;
            let timeout = Duration::from_secs(source.timeout_secs);
            Box::new(
                HttpCsvProvider::new(batting, pitching, timeout)
                    .context("failed to build HTTP stats provider")?,
            )
        }
    };
    Ok(Some(provider))
}

/// Create the engine and populate its stat store.
///
/// A failed fetch is logged and left on the engine; every matchup then
/// reports the data source as unavailable.
pub async fn prepare_engine(config: &Config) -> anyhow::Result<Engine> {
    let mut engine = Engine::new(config.engine);
    let settings = engine.settings();
    info!(
        "Engine settings: expectancy={}, projection={}, thresholds {}/{}",
        settings.expectancy.label(),
        settings.projection.label(),
        settings.thresholds.spread,
        settings.thresholds.total
    );

    match build_provider(&config.source)? {
        None => {
            for t in &config.teams {
                engine.add_team_stats(&t.team, t.avg, t.obp, t.slg, t.era, t.whip);
            }
            info!("Loaded {} manually entered teams", engine.store().len());
        }
        Some(provider) => {
            let season = config.source.season();
            if let Err(e) = refresh_engine(&mut engine, provider.as_ref(), season).await {
                warn!("continuing without team stats: {}", e);
            }
        }
    }

    Ok(engine)
}

/// Project one matchup and compare it to its market lines.
pub fn evaluate_matchup(engine: &Engine, matchup: &Matchup) -> MatchupOutcome {
    let result = engine
        .analyze_matchup(&matchup.home, &matchup.away)
        .map(|projection| {
            let assessment = engine.assess(
                &projection,
                &matchup.home,
                &matchup.away,
                matchup.market_spread,
                matchup.market_total,
            );
            Evaluation {
                projection,
                assessment,
            }
        });

    if let Err(e) = &result {
        warn!("skipping {} vs {}: {}", matchup.home, matchup.away, e);
    }

    MatchupOutcome {
        matchup: matchup.clone(),
        result,
    }
}

/// Evaluate every matchup in slate order.
pub fn evaluate_slate(engine: &Engine, matchups: &[Matchup]) -> Vec<MatchupOutcome> {
    let outcomes: Vec<MatchupOutcome> = matchups.iter().map(|m| evaluate_matchup(engine, m)).collect();
    let flagged = outcomes
        .iter()
        .filter(|o| matches!(&o.result, Ok(e) if e.assessment.has_value()))
        .count();
    info!("Evaluated {} matchups, {} with value", outcomes.len(), flagged);
    outcomes
}
