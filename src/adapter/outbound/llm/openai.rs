//! OpenAI LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the OpenAI
//! Chat Completions API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::check_status;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::Llm;

/// OpenAI Chat Completions API endpoint.
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// System message sent ahead of every prompt.
const SYSTEM_PROMPT: &str = "You are a financial analyst. You answer with a single word.";

/// OpenAI API client.
#[derive(Debug)]
pub struct OpenAi {
    client: Client,
    api_key: String,
    /// Model identifier (e.g., "gpt-4o-mini").
    model: String,
    max_tokens: usize,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
    api_url: String,
}

impl OpenAi {
    /// Create a new OpenAI client with explicit configuration.
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
            api_url: API_URL.to_string(),
        }
    }

    /// Create a client with the key from `OPENAI_API_KEY`.
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

    /// Point the client at a different endpoint, e.g. an OpenAI-compatible proxy.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    fn request<'a>(&'a self, prompt: &'a str) -> Request<'a> {
        Request {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
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
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl Response {
    fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Upstream {
                provider: "openai",
                reason: "response contained no message".into(),
            })
    }
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_system_and_user_messages() {
        let client = OpenAi::new("key", "gpt-4o-mini", 16, 0.0);
        let json = serde_json::to_value(client.request("Is this good?")).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 16);
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Is this good?");
    }

    #[test]
    fn request_escapes_quotes_in_prompt() {
        let client = OpenAi::new("key", "gpt-4o-mini", 16, 0.0);
        let prompt = r#"news: "Acme \ Co" beats {estimates}"#;
        let json_str = serde_json::to_string(&client.request(prompt)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed["messages"][1]["content"], prompt);
    }

    #[test]
    fn response_first_choice_is_returned() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Good"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "Bad"}, "finish_reason": "stop"}
            ]
        }"#;

        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().unwrap(), "Good");
    }

    #[test]
    fn empty_choices_is_an_upstream_error() {
        let response: Response = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(Error::Upstream {
                provider: "openai",
                ..
            })
        ));
    }

    #[test]
    fn null_content_is_an_upstream_error() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn malformed_response_fails_to_parse() {
        assert!(serde_json::from_str::<Response>(r#"{"id": "x"}"#).is_err());
        assert!(serde_json::from_str::<Response>(r#"{"choices": "nope"}"#).is_err());
    }

    #[test]
    fn api_url_can_be_overridden() {
        let client = OpenAi::new("key", "m", 16, 0.0).with_api_url("http://localhost:8080/v1");
        assert_eq!(client.api_url, "http://localhost:8080/v1");
        assert_eq!(client.name(), "openai");
    }

    #[test]
    fn default_api_url_is_chat_completions() {
        assert!(API_URL.starts_with("https://"));
        assert!(API_URL.ends_with("/v1/chat/completions"));
    }
}
