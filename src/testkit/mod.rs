//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for tickers and articles.
//! - [`news`]: `ScriptedNews`, a [`NewsProvider`](crate::port::outbound::news::NewsProvider)
//!   with per-ticker canned answers.
//! - [`scoring`]: Scripted lexicon scorer and model classifier.
//! - [`store`]: In-memory article and score stores.

pub mod domain;
pub mod news;
pub mod scoring;
pub mod store;
