//! Infrastructure configuration modules.

pub mod llm;
pub mod logging;
pub mod news;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod tickers;
