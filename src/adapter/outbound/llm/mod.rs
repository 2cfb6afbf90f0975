//! LLM adapter modules.
//!
//! Implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait for
//! the OpenAI and Anthropic APIs. Both are used through
//! [`LlmClassifier`](crate::application::LlmClassifier), which owns the
//! prompt and the timeout.

pub mod anthropic;
pub mod openai;

use reqwest::Response;

use crate::error::{Error, Result};

/// Longest slice of an error body kept in the error message.
const MAX_ERROR_BODY: usize = 200;

/// Turn a non-success response into [`Error::Upstream`] carrying the status
/// and the start of the body.
pub(crate) async fn check_status(provider: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Upstream {
        provider,
        reason: format!("HTTP {status}: {}", truncate(body.trim(), MAX_ERROR_BODY)),
    })
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
