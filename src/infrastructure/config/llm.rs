//! LLM provider configuration.
//!
//! API keys are read from `OPENAI_API_KEY` or `ANTHROPIC_API_KEY` at
//! startup, never from the config file.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// LLM provider configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmConfig {
    /// Provider used for model classification. Defaults to OpenAI.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Used when `provider` is `anthropic`.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Used when `provider` is `openai`.
    #[serde(default)]
    pub openai: OpenAiConfig,
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Anthropic,
    #[default]
    OpenAi,
}

impl LlmProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
        }
    }
}

/// Anthropic-specific configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// Defaults to "claude-3-5-haiku-latest".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// A label needs only a handful of tokens. Defaults to 16.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// OpenAI-specific configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Defaults to "gpt-4o-mini".
    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Defaults to 16.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl LlmConfig {
    /// Model name of the active provider.
    #[must_use]
    pub fn model(&self) -> &str {
        match self.provider {
            LlmProvider::Anthropic => &self.anthropic.model,
            LlmProvider::OpenAi => &self.openai.model,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let (max_tokens, temperature) = match self.provider {
            LlmProvider::Anthropic => (self.anthropic.max_tokens, self.anthropic.temperature),
            LlmProvider::OpenAi => (self.openai.max_tokens, self.openai.temperature),
        };
        if self.model().trim().is_empty() {
            return Err(ConfigError::MissingField { field: "llm.model" }.into());
        }
        if max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature",
                reason: "must be between 0 and 2".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".into()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".into()
}

fn default_temperature() -> f64 {
    0.0
}

const fn default_max_tokens() -> usize {
    16
}
