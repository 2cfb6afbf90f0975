//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is read from a TOML file; API keys come from the
//! environment and never from the file.
//!
//! # Example
//!
//! ```no_run
//! use stocksent::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use super::news::NewsConfig;
use super::pipeline::PipelineConfig;
use super::report::ReportConfig;
use super::tickers::TickersConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every key is optional. Load from a file with [`Config::load`] or parse
/// directly with [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file. Defaults to "stocksent.db".
    #[serde(default = "default_database_path")]
    pub database: String,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// LLM provider used by the model classifier.
    #[serde(default)]
    pub llm: LlmConfig,

    /// News provider endpoint and request limits.
    #[serde(default)]
    pub news: NewsConfig,

    /// Where the ticker list is read from.
    #[serde(default)]
    pub tickers: TickersConfig,

    /// Concurrency, classifier limits and aggregation weights.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            llm: LlmConfig::default(),
            news: NewsConfig::default(),
            tickers: TickersConfig::default(),
            pipeline: PipelineConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

fn default_database_path() -> String {
    "stocksent.db".to_string()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: every setting has a default.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is malformed,
    /// or fails validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::parse_toml`]; call it again after applying
    /// command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] or [`ConfigError::MissingField`]
    /// naming the offending key.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        self.logging.validate()?;
        self.llm.validate()?;
        self.news.validate()?;
        self.pipeline.validate()?;
        Ok(())
    }

    /// Initialize the global tracing subscriber from `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::llm::LlmProvider;
    use crate::infrastructure::config::report::ReportFormat;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.database, "stocksent.db");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
        assert_eq!(config.llm.model(), "gpt-4o-mini");
        assert_eq!(config.news.base_url, "https://api.polygon.io");
        assert_eq!(config.news.limit, 50);
        assert_eq!(config.tickers.path, PathBuf::from("Tickers.csv"));
        assert_eq!(config.pipeline.concurrency, 4);
        assert_eq!(config.pipeline.classifier_timeout_ms, 20_000);
        assert_eq!(config.pipeline.classifier_max_attempts, 2);
        assert!(config.report.output_path.is_none());
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn parses_every_section() {
        let toml = r#"
            database = "data/news.db"

            [logging]
            level = "debug"
            format = "json"

            [llm]
            provider = "anthropic"

            [llm.anthropic]
            model = "claude-3-5-sonnet-latest"
            max_tokens = 8

            [news]
            base_url = "http://localhost:9000"
            limit = 10
            timeout_ms = 500

            [tickers]
            path = "lists/sp.csv"
            column = 1
            has_headers = false

            [pipeline]
            concurrency = 1
            classifier_timeout_ms = 5000
            classifier_max_attempts = 3
            lexicon_weight = 0.25
            model_weight = 0.75

            [report]
            output_path = "out/report.json"
            format = "json"
        "#;
        let config = Config::parse_toml(toml).unwrap();

        assert_eq!(config.database, "data/news.db");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.llm.provider, LlmProvider::Anthropic);
        assert_eq!(config.llm.model(), "claude-3-5-sonnet-latest");
        assert_eq!(config.llm.anthropic.max_tokens, 8);
        assert_eq!(config.news.limit, 10);
        assert_eq!(config.tickers.column, 1);
        assert!(!config.tickers.has_headers);
        assert_eq!(config.pipeline.concurrency, 1);
        assert_eq!(config.pipeline.classifier_max_attempts, 3);
        assert_eq!(config.pipeline.policy().model_weight(), 0.75);
        assert_eq!(
            config.report.output_path,
            Some(PathBuf::from("out/report.json"))
        );
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn rejects_invalid_values_with_field_name() {
        let cases = [
            ("[pipeline]\nconcurrency = 0", "pipeline.concurrency"),
            ("[pipeline]\nclassifier_timeout_ms = 0", "pipeline.classifier_timeout_ms"),
            ("[pipeline]\nclassifier_max_attempts = 0", "pipeline.classifier_max_attempts"),
            ("[pipeline]\nlexicon_weight = -0.5", "pipeline.lexicon_weight"),
            ("[logging]\nformat = \"xml\"", "logging.format"),
            ("[news]\nlimit = 0", "news.limit"),
            ("[news]\nbase_url = \"not a url\"", "news.base_url"),
            ("database = \"\"", "database"),
        ];
        for (toml, field) in cases {
            let err = Config::parse_toml(toml).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "{toml:?} gave {err}, expected mention of {field}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml("[pipeline\nconcurrency = 2").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_provider_is_a_parse_error() {
        let err = Config::parse_toml("[llm]\nprovider = \"mystery\"").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.database, "stocksent.db");
    }

    #[test]
    fn load_reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database = \"other.db\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database, "other.db");
    }
}
