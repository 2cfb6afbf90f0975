//! Outbound adapters implementing the ports in [`crate::port::outbound`].

pub mod lexicon;
pub mod llm;
pub mod polygon;
pub mod sqlite;
pub mod tickers;
