//! SQLite persistence adapters.
//!
//! Diesel-backed implementations of the [`ArticleStore`] and [`ScoreStore`]
//! ports. Both stores share one connection pool; every Diesel call runs on
//! tokio's blocking pool.
//!
//! [`ArticleStore`]: crate::port::outbound::store::ArticleStore
//! [`ScoreStore`]: crate::port::outbound::store::ScoreStore

pub mod article_store;
pub mod database;
pub mod score_store;

pub use article_store::SqliteArticleStore;
pub use database::connection::{open, DbPool};
pub use score_store::SqliteScoreStore;
