//! Anthropic Claude LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the Anthropic
//! Messages API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::check_status;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::Llm;

/// Anthropic Messages API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Anthropic Claude API client.
#[derive(Debug)]
pub struct Anthropic {
    client: Client,
    api_key: String,
    /// Model identifier (e.g., "claude-3-5-haiku-latest").
    model: String,
    max_tokens: usize,
    /// Sampling temperature (0.0 to 1.0).
    temperature: f64,
}

impl Anthropic {
    /// Create a new Anthropic client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: usize,
        temperature: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Create a client with the key from `ANTHROPIC_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or empty.
    pub fn from_env(model: impl Into<String>, max_tokens: usize, temperature: f64) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;
        Ok(Self::new(api_key, model, max_tokens, temperature))
    }

    fn request<'a>(&'a self, prompt: &'a str) -> Request<'a> {
        Request {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: usize,
    temperature: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Response {
    content: Vec<ContentBlock>,
}

/// Only `text` blocks carry output; other block types are skipped.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

impl Response {
    fn into_text(self) -> Result<String> {
        let text: String = self
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text)
            .collect();
        if text.is_empty() {
            return Err(Error::Upstream {
                provider: "anthropic",
                reason: "response contained no text".into(),
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl Llm for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request(prompt))
            .send()
            .await?;

        check_status(self.name(), response)
            .await?
            .json::<Response>()
            .await?
            .into_text()
    }
}


/// Live tests. Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    #[ignore = "requires ANTHROPIC_API_KEY and network access"]
    async fn answers_with_one_word() {
        let client = match Anthropic::from_env("claude-3-5-haiku-latest", 16, 0.0) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Skipping Anthropic integration test: {e}");
                return;
            }
        };

        let result = tokio::time::timeout(
            Duration::from_secs(30),
            client.complete("Answer with exactly one word: Good, Bad or Neutral. Is a recall good?"),
        )
        .await
        .expect("Request timed out")
        .expect("API call failed");

        assert!(!result.trim().is_empty());
    }
}
