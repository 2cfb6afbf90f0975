//! Persistence ports for articles and sentiment records.

use std::future::Future;

use crate::domain::{
    AggregationPolicy, Article, ArticleId, SentimentRecord, SentimentTally, Ticker,
    TickerAggregate,
};
use crate::error::Result;

/// Result of an insert-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The row was written.
    Stored,
    /// A row with the same identity already existed and was left untouched.
    AlreadyExists,
}

/// Durable storage for raw articles, keyed by [`ArticleId`].
///
/// Any error is a storage failure and is fatal for the run.
pub trait ArticleStore: Send + Sync {
    /// True if an article with this identity has been stored.
    fn has(&self, id: &ArticleId) -> impl Future<Output = Result<bool>> + Send;

    /// Insert the article unless one with the same identity exists.
    fn put(&self, article: &Article) -> impl Future<Output = Result<PutOutcome>> + Send;
}

/// Durable storage for per-article sentiment records.
///
/// Record presence is the "already scored" signal: an article whose
/// record exists is never scored again.
pub trait ScoreStore: Send + Sync {
    /// True if a sentiment record exists for this article.
    fn has(&self, id: &ArticleId) -> impl Future<Output = Result<bool>> + Send;

    /// Save a record, replacing any record with the same identity.
    fn put(&self, record: &SentimentRecord) -> impl Future<Output = Result<()>> + Send;

    /// Sum all persisted records for `ticker`. Zero records is an empty tally.
    fn tally(&self, ticker: &Ticker) -> impl Future<Output = Result<SentimentTally>> + Send;

    /// Aggregate all persisted records for `ticker` under `policy`.
    fn aggregate(
        &self,
        ticker: &Ticker,
        policy: &dyn AggregationPolicy,
    ) -> impl Future<Output = Result<TickerAggregate>> + Send {
        async move {
            let tally = self.tally(ticker).await?;
            Ok(TickerAggregate::from_tally(ticker.clone(), tally, policy))
        }
    }
}
