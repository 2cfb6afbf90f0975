//! Default aggregation policy.

use crate::domain::{AggregationPolicy, SentimentTally};

/// Weighted mean of the lexicon mean and the model label mean.
///
/// Both means live in `[-1, 1]` (label values are `Good = 1`, `Bad = -1`,
/// `Unknown = 0`), so the combined score does too. With equal weights this is
/// the plain average of the two signals.
///
/// This normalizes the plain sum of the two means: dividing by the total
/// weight maps `[-2, 2]` onto `[-1, 1]` without changing the sign or the
/// ranking of tickers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedMeanPolicy {
    lexicon_weight: f64,
    model_weight: f64,
}

impl WeightedMeanPolicy {
    /// Weights are expected to be validated by configuration: finite,
    /// non-negative and not both zero.
    #[must_use]
    pub const fn new(lexicon_weight: f64, model_weight: f64) -> Self {
        Self {
            lexicon_weight,
            model_weight,
        }
    }

    #[must_use]
    pub const fn lexicon_weight(&self) -> f64 {
        self.lexicon_weight
    }

    #[must_use]
    pub const fn model_weight(&self) -> f64 {
        self.model_weight
    }
}

impl Default for WeightedMeanPolicy {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl AggregationPolicy for WeightedMeanPolicy {
    fn combine(&self, tally: &SentimentTally) -> f64 {
        let total = self.lexicon_weight + self.model_weight;
        if tally.is_empty() || total <= 0.0 {
            return 0.0;
        }
        (self.lexicon_weight * tally.lexicon_mean() + self.model_weight * tally.model_mean())
            / total
    }
}
