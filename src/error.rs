use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("upstream error from {provider}: {reason}")]
    Upstream {
        provider: &'static str,
        reason: String,
    },
}

impl Error {
    /// True for failures of the durable store, which must abort a run.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Connection(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_the_field() {
        let err: Error = ConfigError::InvalidValue {
            field: "concurrency",
            reason: "must be at least 1".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid value for concurrency: must be at least 1"
        );
    }

    #[test]
    fn storage_errors_are_classified() {
        assert!(Error::Database("disk full".into()).is_storage());
        assert!(Error::Connection("pool timed out".into()).is_storage());
        assert!(!Error::Parse("bad".into()).is_storage());
        assert!(!Error::Upstream {
            provider: "polygon",
            reason: "status ERROR".into()
        }
        .is_storage());
    }
}
