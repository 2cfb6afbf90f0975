//! Handler for `stocksent run`.

use tracing::info;

use super::command::RunArgs;
use super::output;
use super::report::emit as emit_report;
use crate::adapter::outbound::tickers::{CsvTickerSource, StaticTickerSource};
use crate::application::ReportAggregator;
use crate::domain::Ticker;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::tickers::TickerSource;

/// Load config, apply flag overrides and initialize logging.
#[allow(clippy::result_large_err)]
pub fn prepare(args: &RunArgs) -> Result<Config> {
    let mut config = Config::load(&args.config.config)?;
    args.apply(&mut config);
    if args.log_level.is_none() {
        match output::verbosity() {
            0 => {}
            1 => config.logging.level = "debug".into(),
            _ => config.logging.level = "trace".into(),
        }
    }
    config.validate()?;
    config.init_logging();
    Ok(config)
}

/// Resolve the ticker list: `--tickers` wins over the configured CSV file.
#[allow(clippy::result_large_err)]
pub fn load_tickers(args: &RunArgs, config: &Config) -> Result<Vec<Ticker>> {
    let source: Box<dyn TickerSource> = match &args.tickers {
        Some(list) => Box::new(StaticTickerSource::parse(&list.join(","))?),
        None => Box::new(CsvTickerSource::new(
            &config.tickers.path,
            config.tickers.column,
            config.tickers.has_headers,
        )),
    };
    source.load()
}

/// Execute `run`: score new articles for every ticker and print the report.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = prepare(args)?;
    let tickers = load_tickers(args, &config)?;
    if tickers.is_empty() {
        output::warning("No tickers to process");
    }

    let runner = bootstrap::build_runner(&config)?;
    let runs = runner.run(&tickers).await?;
    let report = ReportAggregator::build(runs);

    emit_report(&report, &config.report)?;
    info!(
        tickers = report.summary.tickers,
        newly_scored = report.summary.newly_scored,
        "Run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::adapter::inbound::cli::command::{Cli, Commands};

    fn run_args(argv: &[&str]) -> RunArgs {
        let cli = Cli::parse_from(std::iter::once("stocksent").chain(argv.iter().copied()));
        match cli.command {
            Commands::Run(args) => *args,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn tickers_flag_is_normalized() {
        let args = run_args(&["run", "--tickers", "aapl, msft", "--tickers", "tsla"]);
        let tickers = load_tickers(&args, &Config::default()).unwrap();

        let symbols: Vec<&str> = tickers.iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn tickers_file_is_read_as_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ticker,Name\nACME,Acme Corp\nINIT,Initech").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args = run_args(&["run", "--tickers-file", &path]);
        let mut config = Config::default();
        args.apply(&mut config);
        let tickers = load_tickers(&args, &config).unwrap();

        let symbols: Vec<&str> = tickers.iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, vec!["ACME", "INIT"]);
    }

    #[test]
    fn missing_tickers_file_is_an_error() {
        let args = run_args(&["run", "--tickers-file", "/nonexistent/tickers.csv"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(load_tickers(&args, &config).is_err());
    }
}
