//! Builders for domain primitives used across tests.

use chrono::{TimeZone, Utc};

use crate::domain::{Article, DedupKey, Ticker};

/// Create a [`Ticker`] from a symbol. Panics on an empty symbol.
pub fn ticker(symbol: &str) -> Ticker {
    Ticker::try_new(symbol).expect("test ticker must not be empty")
}

/// Create a [`DedupKey`]. Panics on an empty key.
pub fn key(key: &str) -> DedupKey {
    DedupKey::try_new(key).expect("test dedup key must not be empty")
}

/// Create an [`Article`] published at a fixed instant.
pub fn article(ticker_symbol: &str, dedup_key: &str, title: &str, description: &str) -> Article {
    Article::new(
        ticker(ticker_symbol),
        key(dedup_key),
        title,
        description,
        Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    )
}
