//! Handler for `stocksent report`, plus report output shared with `run`.

use std::fs;

use tracing::info;

use super::command::ReportArgs;
use super::output;
use crate::adapter::outbound::sqlite::{self, SqliteScoreStore};
use crate::adapter::outbound::tickers::StaticTickerSource;
use crate::application::{Report, ReportAggregator, TickerRun};
use crate::error::Result;
use crate::infrastructure::config::report::{ReportConfig, ReportFormat};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::ScoreStore;
use crate::port::outbound::tickers::TickerSource;

/// Print the report to stdout and, if configured, write it to a file.
#[allow(clippy::result_large_err)]
pub fn emit(report: &Report, config: &ReportConfig) -> Result<()> {
    output::document("report", &report.render_text(), serde_json::to_value(report)?);

    if let Some(path) = &config.output_path {
        let contents = match config.format {
            ReportFormat::Text => report.render_text(),
            ReportFormat::Json => report.to_json()?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        info!(path = %path.display(), "Report written");
    }
    Ok(())
}

/// Build a report from stored scores only. No network access.
pub async fn build(
    store: &SqliteScoreStore,
    config: &Config,
    args: &ReportArgs,
) -> Result<Report> {
    let tickers = match &args.tickers {
        Some(list) => StaticTickerSource::parse(&list.join(","))?.load()?,
        None => store.tickers().await?,
    };
    let policy = config.pipeline.policy();

    let mut runs = Vec::with_capacity(tickers.len());
    for ticker in &tickers {
        let aggregate = store.aggregate(ticker, &policy).await?;
        runs.push(TickerRun::from_stored(aggregate));
    }
    Ok(ReportAggregator::build(runs))
}

/// Execute `report`.
pub async fn execute(args: &ReportArgs) -> Result<()> {
    let mut config = Config::load(&args.config.config)?;
    if let Some(database) = &args.database {
        config.database.clone_from(database);
    }
    config.validate()?;
    config.init_logging();

    let pool = sqlite::open(&config.database)?;
    let report = build(&SqliteScoreStore::new(pool), &config, args).await?;
    if report.rows.is_empty() {
        output::hint("No stored scores yet. Run `stocksent run` first.");
    }
    emit(&report, &config.report)
}
