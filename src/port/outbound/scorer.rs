//! Lexicon scoring port.

/// Pure, deterministic text scorer.
///
/// Implementations must be total: every input, including empty or
/// malformed text, maps to a finite score in `[-1, 1]`, with `0.0` as the
/// neutral score.
pub trait LexiconScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}
