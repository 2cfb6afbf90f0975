//! Command-line interface definitions.
//!
//! `run` fetches and scores news, then prints the report. `report` rebuilds
//! the report from the database without touching the network. `check` and
//! `config` help set things up.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infrastructure::config::settings::Config;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// News sentiment aggregation for stock tickers
#[derive(Parser, Debug)]
#[command(name = "stocksent")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity (-v debug logs, -vv trace logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch news, score new articles and print the sentiment report
    Run(Box<RunArgs>),

    /// Print the report for already stored scores without fetching
    Report(ReportArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `stocksent config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
}

/// Subcommands for `stocksent check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and show the effective settings.
    Config(ConfigPathArg),
}

/// Shared argument for commands that read the configuration file.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file. A missing file means defaults.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `run`. Flags override the configuration file.
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Comma-separated tickers to process instead of the ticker file
    #[arg(long, value_delimiter = ',', conflicts_with = "tickers_file")]
    pub tickers: Option<Vec<String>>,

    /// CSV file with one ticker per row
    #[arg(long)]
    pub tickers_file: Option<PathBuf>,

    /// Tickers processed at once (1 = sequential)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Timeout for a single model classification call, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Path to the SQLite database file
    #[arg(long)]
    pub database: Option<String>,

    /// Log filter, e.g. "debug" or "warn,stocksent=debug"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Also write the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.tickers_file {
            config.tickers.path.clone_from(path);
        }
        if let Some(concurrency) = self.concurrency {
            config.pipeline.concurrency = concurrency;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.pipeline.classifier_timeout_ms = timeout_ms;
        }
        if let Some(database) = &self.database {
            config.database.clone_from(database);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = "json".into();
        }
        if let Some(output) = &self.output {
            config.report.output_path = Some(output.clone());
        }
    }
}

/// Arguments for `report`.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Comma-separated tickers to report on (default: every stored ticker)
    #[arg(long, value_delimiter = ',')]
    pub tickers: Option<Vec<String>>,

    /// Path to the SQLite database file
    #[arg(long)]
    pub database: Option<String>,
}
