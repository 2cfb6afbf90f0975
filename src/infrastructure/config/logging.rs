//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if !matches!(self.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.format),
            }
            .into());
        }
        if EnvFilter::try_new(&self.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("not a valid filter: {:?}", self.level),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so the report on stdout stays clean. A second call
    /// is a no-op.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        LoggingConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_unknown_format() {
        let config = LoggingConfig {
            format: "xml".into(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_module_directives() {
        let config = LoggingConfig {
            level: "warn,stocksent=debug".into(),
            format: "json".into(),
        };
        config.validate().unwrap();
    }
}
