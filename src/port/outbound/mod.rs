//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the collaborators of the sentiment pipeline:
//! news retrieval, ticker lists, storage, scoring and classification.

pub mod classifier;
pub mod llm;
pub mod news;
pub mod scorer;
pub mod store;
pub mod tickers;
