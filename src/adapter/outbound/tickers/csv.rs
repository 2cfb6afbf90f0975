//! CSV ticker list.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Ticker;
use crate::error::Result;
use crate::port::outbound::tickers::TickerSource;

/// Reads tickers from one column of a CSV file, in file order.
///
/// Blank cells and short rows are skipped.
#[derive(Debug, Clone)]
pub struct CsvTickerSource {
    path: PathBuf,
    column: usize,
    has_headers: bool,
}

impl CsvTickerSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, column: usize, has_headers: bool) -> Self {
        Self {
            path: path.into(),
            column,
            has_headers,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TickerSource for CsvTickerSource {
    fn load(&self) -> Result<Vec<Ticker>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(::csv::Trim::All)
            .from_path(&self.path)?;

        let mut tickers = Vec::new();
        for record in reader.records() {
            let record = record?;
            match record.get(self.column) {
                Some(cell) if !cell.is_empty() => tickers.push(Ticker::try_new(cell)?),
                _ => debug!(
                    line = record.position().map(|p| p.line()),
                    "Skipping empty ticker cell"
                ),
            }
        }

        debug!(path = %self.path.display(), count = tickers.len(), "Loaded tickers");
        Ok(tickers)
    }
}
