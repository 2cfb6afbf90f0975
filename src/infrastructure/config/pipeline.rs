//! Pipeline tuning: concurrency, classifier limits and aggregation weights.

use std::time::Duration;

use serde::Deserialize;

use crate::application::{ClassifierSettings, WeightedMeanPolicy};
use crate::error::{ConfigError, Result};

/// `[pipeline]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Tickers processed at once. 1 means strictly sequential.
    pub concurrency: usize,
    /// Upper bound on one model call.
    pub classifier_timeout_ms: u64,
    pub classifier_max_attempts: u32,
    pub classifier_retry_delay_ms: u64,
    pub lexicon_weight: f64,
    pub model_weight: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            classifier_timeout_ms: 20_000,
            classifier_max_attempts: 2,
            classifier_retry_delay_ms: 1_000,
            lexicon_weight: 1.0,
            model_weight: 1.0,
        }
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            timeout: Duration::from_millis(self.classifier_timeout_ms),
            max_attempts: self.classifier_max_attempts,
            retry_delay: Duration::from_millis(self.classifier_retry_delay_ms),
        }
    }

    #[must_use]
    pub fn policy(&self) -> WeightedMeanPolicy {
        WeightedMeanPolicy::new(self.lexicon_weight, self.model_weight)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.concurrency",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.classifier_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.classifier_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.classifier_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.classifier_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        for (field, weight) in [
            ("pipeline.lexicon_weight", self.lexicon_weight),
            ("pipeline.model_weight", self.model_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be a finite number >= 0".to_string(),
                }
                .into());
            }
        }
        if self.lexicon_weight + self.model_weight <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.model_weight",
                reason: "lexicon_weight and model_weight cannot both be 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
