//! Provider-agnostic domain types.
//!
//! Tickers, articles and the sentiment values derived from them. Nothing in
//! this module performs I/O.

pub mod aggregate;
pub mod article;
pub mod error;
pub mod id;
pub mod sentiment;

pub use aggregate::{AggregationPolicy, SentimentTally, TickerAggregate};
pub use article::Article;
pub use error::DomainError;
pub use id::{ArticleId, DedupKey, Ticker};
pub use sentiment::{LexiconBand, ModelLabel, SentimentRecord};
