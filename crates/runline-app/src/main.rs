// Runline entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, stdout is reserved for the report)
// 2. Load config (copying defaults on first run)
// 3. Build the engine and load team stats
// 4. Evaluate the slate
// 5. Print the report

use runline_app::app;
use runline_app::config;
use runline_app::report;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("runline starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {:?} source, {} matchups",
        config.source.kind,
        config.matchups.len()
    );

    // 3. Build the engine and load team stats
    let engine = app::prepare_engine(&config)
        .await
        .context("failed to prepare analysis engine")?;

    // 4. Evaluate the slate
    let outcomes = app::evaluate_slate(&engine, &config.matchups);

    // 5. Print the report
    let rendered = report::render(config.output, &outcomes).context("failed to render report")?;
    print!("{rendered}");

    info!("runline finished");
    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "runline=info,warn";

/// Send tracing output to `logs/runline.log`. `RUST_LOG` overrides the
/// default filter.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir).context("failed to create logs directory")?;
    let log_path = log_dir.join("runline.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}
