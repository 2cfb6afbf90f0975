//! Sentiment values attached to articles.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::ArticleId;

/// Categorical sentiment returned by the model classifier.
///
/// `Unknown` covers neutral answers, malformed answers and failed calls alike;
/// it contributes nothing to an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelLabel {
    Good,
    Bad,
    #[default]
    Unknown,
}

impl ModelLabel {
    /// Numeric contribution of this label to an aggregate.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Good => 1.0,
            Self::Bad => -1.0,
            Self::Unknown => 0.0,
        }
    }

    /// Storage form of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            "unknown" => Ok(Self::Unknown),
            other => Err(DomainError::UnknownLabel {
                label: other.to_string(),
            }),
        }
    }
}

/// Five-way bucketing of a lexicon score.
///
/// Bounds are left-closed: `[-1, -0.8)`, `[-0.8, -0.35)`, `[-0.35, 0.35)`,
/// `[0.35, 0.8)` and `[0.8, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconBand {
    VeryBad,
    Bad,
    Neutral,
    Good,
    VeryGood,
}

impl LexiconBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < -0.8 {
            Self::VeryBad
        } else if score < -0.35 {
            Self::Bad
        } else if score < 0.35 {
            Self::Neutral
        } else if score < 0.8 {
            Self::Good
        } else {
            Self::VeryGood
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryBad => "very bad",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
            Self::Good => "good",
            Self::VeryGood => "very good",
        }
    }
}

impl fmt::Display for LexiconBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both sentiment signals for one article. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub article: ArticleId,
    pub lexicon_score: f64,
    pub model_label: ModelLabel,
    pub scored_at: DateTime<Utc>,
}

impl SentimentRecord {
    /// The lexicon score is kept in `[-1, 1]`; a non-finite score becomes 0.
    #[must_use]
    pub fn new(article: ArticleId, lexicon_score: f64, model_label: ModelLabel) -> Self {
        Self {
            article,
            lexicon_score: bounded_score(lexicon_score),
            model_label,
            scored_at: Utc::now(),
        }
    }
}

fn bounded_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
