//! Adapters: the CLI on the driving side, HTTP/SQLite/lexicon on the driven side.

pub mod inbound;
pub mod outbound;
