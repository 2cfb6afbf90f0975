//! Lexicon-based sentiment scorers.

pub mod vader;

pub use vader::VaderScorer;
