//! Ticker list given up front, e.g. on the command line.

use crate::domain::Ticker;
use crate::error::Result;
use crate::port::outbound::tickers::TickerSource;

/// Serves a fixed, already-parsed ticker list.
#[derive(Debug, Clone, Default)]
pub struct StaticTickerSource {
    tickers: Vec<Ticker>,
}

impl StaticTickerSource {
    #[must_use]
    pub fn new(tickers: Vec<Ticker>) -> Self {
        Self { tickers }
    }

    /// Parse a comma- or whitespace-separated list such as `"AAPL, msft TSLA"`.
    /// Blank entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is not a valid ticker symbol.
    pub fn parse(list: &str) -> Result<Self> {
        let tickers = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.trim().is_empty())
            .map(Ticker::try_new)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(tickers))
    }
}

impl TickerSource for StaticTickerSource {
    fn load(&self) -> Result<Vec<Ticker>> {
        Ok(self.tickers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators_and_normalizes() {
        let source = StaticTickerSource::parse("aapl, MSFT  tsla,,").unwrap();
        let symbols: Vec<String> = source
            .load()
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let source = StaticTickerSource::parse("B,A,B").unwrap();
        let symbols: Vec<String> = source
            .load()
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(symbols, vec!["B", "A", "B"]);
    }

    #[test]
    fn empty_list_is_empty() {
        assert!(StaticTickerSource::parse("").unwrap().load().unwrap().is_empty());
    }
}
