//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Stock ticker symbol - newtype for type safety.
///
/// Symbols are trimmed and upper-cased on construction so `" aapl"` and
/// `"AAPL"` name the same ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Create a normalized ticker, rejecting blank symbols.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyTicker`] if the symbol is empty after trimming.
    pub fn try_new(symbol: impl AsRef<str>) -> Result<Self, DomainError> {
        let symbol = symbol.as_ref().trim();
        if symbol.is_empty() {
            return Err(DomainError::EmptyTicker);
        }
        Ok(Self(symbol.to_ascii_uppercase()))
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Provider-assigned article identifier used to recognize an article across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DedupKey(String);

impl DedupKey {
    /// Create a dedup key, rejecting blank identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyDedupKey`] if the key is empty after trimming.
    pub fn try_new(key: impl AsRef<str>) -> Result<Self, DomainError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(DomainError::EmptyDedupKey);
        }
        Ok(Self(key.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an article: the ticker it was fetched for plus its dedup key.
///
/// The same provider article fetched for two tickers is two articles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId {
    pub ticker: Ticker,
    pub key: DedupKey,
}

impl ArticleId {
    #[must_use]
    pub fn new(ticker: Ticker, key: DedupKey) -> Self {
        Self { ticker, key }
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ticker, self.key)
    }
}
