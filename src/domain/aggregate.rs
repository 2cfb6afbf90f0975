//! Per-ticker aggregation values.

use serde::Serialize;

use super::id::Ticker;
use super::sentiment::{ModelLabel, SentimentRecord};

/// Order-independent sums over a ticker's sentiment records.
///
/// Every field is a sum or a count, so folding records in any order gives
/// the same tally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentTally {
    pub count: usize,
    pub lexicon_sum: f64,
    pub good: usize,
    pub bad: usize,
    pub unknown: usize,
}

impl SentimentTally {
    /// Fold one record's signals into the tally.
    pub fn add(&mut self, lexicon_score: f64, label: ModelLabel) {
        self.count += 1;
        self.lexicon_sum += lexicon_score;
        match label {
            ModelLabel::Good => self.good += 1,
            ModelLabel::Bad => self.bad += 1,
            ModelLabel::Unknown => self.unknown += 1,
        }
    }

    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SentimentRecord>) -> Self {
        let mut tally = Self::default();
        for record in records {
            tally.add(record.lexicon_score, record.model_label);
        }
        tally
    }

    /// Mean lexicon score, `0.0` when empty.
    #[must_use]
    pub fn lexicon_mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.lexicon_sum / self.count as f64
    }

    /// Mean model label value (`Good = 1`, `Bad = -1`, `Unknown = 0`), `0.0` when empty.
    #[must_use]
    pub fn model_mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.good as f64 - self.bad as f64) / self.count as f64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Combines a ticker's tally into one comparable score.
///
/// The weighting of the lexicon and model signals is a policy choice; swap
/// the implementation to change it without touching the pipeline.
pub trait AggregationPolicy: Send + Sync {
    /// Score for the given tally. Must return `0.0` for an empty tally.
    fn combine(&self, tally: &SentimentTally) -> f64;
}

/// Aggregated sentiment for one ticker. Recomputed every run, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerAggregate {
    pub ticker: Ticker,
    pub count: usize,
    pub score: f64,
    pub tally: SentimentTally,
}

impl TickerAggregate {
    /// Build the aggregate for a tally under the given policy.
    #[must_use]
    pub fn from_tally(
        ticker: Ticker,
        tally: SentimentTally,
        policy: &dyn AggregationPolicy,
    ) -> Self {
        if tally.is_empty() {
            return Self::neutral(ticker);
        }
        Self {
            ticker,
            count: tally.count,
            score: policy.combine(&tally),
            tally,
        }
    }

    /// The aggregate reported for a ticker with nothing to aggregate.
    #[must_use]
    pub fn neutral(ticker: Ticker) -> Self {
        Self {
            ticker,
            count: 0,
            score: 0.0,
            tally: SentimentTally::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_has_neutral_means() {
        let tally = SentimentTally::default();
        assert!(tally.is_empty());
        assert_eq!(tally.lexicon_mean(), 0.0);
        assert_eq!(tally.model_mean(), 0.0);
    }

    #[test]
    fn tally_means() {
        let mut tally = SentimentTally::default();
        tally.add(0.4, ModelLabel::Good);
        tally.add(-0.2, ModelLabel::Bad);
        tally.add(0.1, ModelLabel::Unknown);
        tally.add(0.5, ModelLabel::Good);

        assert_eq!(tally.count, 4);
        assert_eq!((tally.good, tally.bad, tally.unknown), (2, 1, 1));
        assert!((tally.lexicon_mean() - 0.2).abs() < 1e-12);
        assert!((tally.model_mean() - 0.25).abs() < 1e-12);
    }

    struct Constant(f64);

    impl AggregationPolicy for Constant {
        fn combine(&self, _tally: &SentimentTally) -> f64 {
            self.0
        }
    }

    #[test]
    fn empty_tally_never_reaches_the_policy() {
        let ticker = Ticker::try_new("ACME").unwrap();
        let agg =
            TickerAggregate::from_tally(ticker, SentimentTally::default(), &Constant(0.9));
        assert_eq!(agg.score, 0.0);
        assert_eq!(agg.count, 0);
    }

    #[test]
    fn from_tally_uses_policy() {
        let ticker = Ticker::try_new("ACME").unwrap();
        let mut tally = SentimentTally::default();
        tally.add(0.3, ModelLabel::Bad);
        let agg = TickerAggregate::from_tally(ticker, tally, &Constant(0.9));
        assert_eq!(agg.count, 1);
        assert_eq!(agg.score, 0.9);
    }

    #[test]
    fn neutral_aggregate() {
        let agg = TickerAggregate::neutral(Ticker::try_new("ACME").unwrap());
        assert_eq!(agg.count, 0);
        assert_eq!(agg.score, 0.0);
        assert!(agg.tally.is_empty());
    }
}
