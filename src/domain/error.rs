//! Domain validation errors.
//!
//! Returned by `try_new` constructors when an input violates a domain rule.
//!
//! ```
//! use stocksent::domain::error::DomainError;
//! use stocksent::domain::id::Ticker;
//!
//! assert!(matches!(Ticker::try_new("   "), Err(DomainError::EmptyTicker)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Ticker symbols cannot be blank.
    #[error("ticker symbol cannot be empty")]
    EmptyTicker,

    /// Articles must carry a provider-assigned identifier.
    #[error("dedup key cannot be empty")]
    EmptyDedupKey,

    /// Stored model labels must be one of the known variants.
    #[error("unknown model label: {label}")]
    UnknownLabel {
        /// The label text that failed to parse.
        label: String,
    },
}
