//! News provider configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Polygon news endpoint settings. The key comes from `POLYGON_API_KEY`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub base_url: String,
    /// Articles requested per ticker.
    pub limit: u32,
    pub timeout_ms: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.polygon.io".into(),
            limit: 50,
            timeout_ms: 10_000,
        }
    }
}

impl NewsConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if url::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "news.base_url",
                reason: format!("not a valid URL: {:?}", self.base_url),
            }
            .into());
        }
        if self.limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "news.limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "news.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
