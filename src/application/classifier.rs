//! LLM-backed sentiment classifier.
//!
//! Wraps an [`Llm`] behind the [`SentimentClassifier`] port. Every failure
//! mode of the model call (transport error, timeout, unparseable answer) is
//! absorbed here and reported as [`ModelLabel::Unknown`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{ModelLabel, Ticker};
use crate::port::outbound::classifier::SentimentClassifier;
use crate::port::outbound::llm::Llm;

/// Call limits for the model classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierSettings {
    /// Upper bound on a single model call.
    pub timeout: Duration,
    /// Number of calls made before giving up. At least one call is always made.
    pub max_attempts: u32,
    /// Pause between failed calls.
    pub retry_delay: Duration,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            max_attempts: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Classifies article text by prompting an LLM.
pub struct LlmClassifier {
    llm: Arc<dyn Llm>,
    settings: ClassifierSettings,
}

impl LlmClassifier {
    #[must_use]
    pub fn new(llm: Arc<dyn Llm>, settings: ClassifierSettings) -> Self {
        Self { llm, settings }
    }

    /// Build the classification prompt for one article.
    #[must_use]
    pub fn prompt(ticker: &Ticker, text: &str) -> String {
        format!(
            "You are an analyst whose task is to assess the sentiment of financial news. \
             Assess the sentiment of the following news in the context of {ticker}: \
             \"{text}\". Answer with exactly one word: Good, Bad or Neutral."
        )
    }

    /// Map a model answer to a label.
    ///
    /// Only the first non-empty line is considered. Quotes and trailing
    /// punctuation are ignored and matching is case-insensitive; anything
    /// that is not clearly good or bad is `Unknown`.
    #[must_use]
    pub fn parse_label(response: &str) -> ModelLabel {
        let Some(line) = response.lines().map(str::trim).find(|l| !l.is_empty()) else {
            return ModelLabel::Unknown;
        };
        let answer = line
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '*' || c == '`')
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .trim()
            .to_ascii_lowercase();

        match answer.as_str() {
            "good" | "very good" | "positive" => ModelLabel::Good,
            "bad" | "very bad" | "negative" => ModelLabel::Bad,
            _ => ModelLabel::Unknown,
        }
    }
}

#[async_trait]
impl SentimentClassifier for LlmClassifier {
    async fn classify(&self, ticker: &Ticker, text: &str) -> ModelLabel {
        if text.trim().is_empty() {
            return ModelLabel::Unknown;
        }

        let prompt = Self::prompt(ticker, text);
        let max_attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let outcome = tokio::time::timeout(self.settings.timeout, self.llm.complete(&prompt))
                .await;

            let failure = match outcome {
                Ok(Ok(response)) => {
                    let label = Self::parse_label(&response);
                    if label == ModelLabel::Unknown {
                        debug!(
                            %ticker,
                            provider = self.llm.name(),
                            response = %response.trim(),
                            "Model answer not recognized as good or bad"
                        );
                    }
                    return label;
                }
                Ok(Err(e)) => e.to_string(),
                Err(_) => format!("timed out after {:?}", self.settings.timeout),
            };

            warn!(
                %ticker,
                provider = self.llm.name(),
                attempt,
                max_attempts,
                error = %failure,
                "Model classification failed"
            );

            if attempt < max_attempts {
                tokio::time::sleep(self.settings.retry_delay).await;
            }
        }

        ModelLabel::Unknown
    }
}
