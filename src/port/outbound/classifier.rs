//! Model sentiment classification port.

use async_trait::async_trait;

use crate::domain::{ModelLabel, Ticker};

/// Categorical sentiment classifier backed by an unreliable service.
///
/// The method is infallible on purpose: implementations absorb transport
/// failures, timeouts and malformed answers and report them as
/// [`ModelLabel::Unknown`], so one bad call never aborts a ticker.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text`, an article about `ticker`.
    async fn classify(&self, ticker: &Ticker, text: &str) -> ModelLabel;
}
