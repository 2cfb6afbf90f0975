//! Ticker list port.

use crate::domain::Ticker;
use crate::error::Result;

/// Supplies the ordered list of tickers for a run.
pub trait TickerSource {
    /// Load tickers in input order. Duplicates are allowed here; the runner
    /// collapses them.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying list cannot be read.
    fn load(&self) -> Result<Vec<Ticker>>;
}
