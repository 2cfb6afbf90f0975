//! Ticker list configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// `[tickers]` section: where the CSV ticker list lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TickersConfig {
    pub path: PathBuf,
    /// Zero-based column holding the symbol.
    pub column: usize,
    pub has_headers: bool,
}

impl Default for TickersConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Tickers.csv"),
            column: 0,
            has_headers: true,
        }
    }
}
