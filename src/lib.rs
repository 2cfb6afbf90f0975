//! Stocksent - news sentiment aggregation for stock tickers.
//!
//! For each ticker the pipeline fetches recent news, scores every new
//! article twice (a VADER lexicon score and an LLM label), persists both in
//! SQLite and aggregates everything stored for the ticker into one score.
//!
//! # Architecture
//!
//! - [`domain`] - Tickers, articles, sentiment records and aggregates
//! - [`port`] - Capability traits: stores, news, scorer, classifier, LLM
//! - [`adapter`] - CLI, SQLite, Polygon, OpenAI/Anthropic, VADER, CSV
//! - [`application`] - Ticker pipeline, runner, classifier, report
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - In-memory stores and scripted collaborators for tests
//! - `integration-tests` - Tests against the live APIs (need API keys)

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
