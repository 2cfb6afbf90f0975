//! Ticker list sources.

pub mod csv;
pub mod fixed;

pub use self::csv::CsvTickerSource;
pub use self::fixed::StaticTickerSource;
