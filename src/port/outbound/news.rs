//! News retrieval port.

use async_trait::async_trait;

use crate::domain::{Article, Ticker};
use crate::error::Result;

/// Source of candidate articles for a ticker.
///
/// May return zero or many articles, including articles seen in earlier
/// runs; deduplication is the pipeline's job.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch recent articles mentioning `ticker`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or answers with an
    /// error status.
    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<Article>>;
}
