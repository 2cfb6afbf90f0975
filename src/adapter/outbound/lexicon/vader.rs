//! VADER lexicon scorer.
//!
//! Uses the compound polarity of the VADER (Valence Aware Dictionary and
//! sEntiment Reasoner) analyzer, which is tuned for short news and social
//! media text and already normalized to `[-1, 1]`.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::port::outbound::scorer::LexiconScorer;

/// [`LexiconScorer`] backed by VADER's compound score.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer for VaderScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let compound = self
            .analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0);
        if compound.is_finite() {
            compound.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_news_scores_above_zero() {
        let scorer = VaderScorer::new();
        let score = scorer.score("Acme reports great earnings and strong growth");
        assert!(score > 0.0, "got {score}");
    }

    #[test]
    fn negative_news_scores_below_zero() {
        let scorer = VaderScorer::new();
        let score = scorer.score("Acme faces terrible losses and fraud charges");
        assert!(score < 0.0, "got {score}");
    }

    #[test]
    fn empty_and_blank_text_is_neutral() {
        let scorer = VaderScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   \n\t"), 0.0);
    }

    #[test]
    fn odd_input_stays_in_range() {
        let scorer = VaderScorer::new();
        for text in [
            "GOOD GOOD GOOD GOOD GOOD GOOD GOOD GOOD GOOD GOOD",
            "Acme??? Wow!!! Best. Quarter. Ever.",
            "12345 67890",
        ] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "{text:?} scored {score}");
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = VaderScorer::new();
        let text = "Shares slip after mixed guidance";
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}
