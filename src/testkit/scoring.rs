//! Scripted lexicon scorer and model classifier.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{ModelLabel, Ticker};
use crate::port::outbound::classifier::SentimentClassifier;
use crate::port::outbound::scorer::LexiconScorer;

/// Returns a fixed score per exact text, or a default.
pub struct ScriptedScorer {
    default: f64,
    scores: HashMap<String, f64>,
}

impl ScriptedScorer {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            scores: HashMap::new(),
        }
    }

    pub fn with(mut self, text: &str, score: f64) -> Self {
        self.scores.insert(text.to_string(), score);
        self
    }
}

impl LexiconScorer for ScriptedScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        self.scores.get(text).copied().unwrap_or(self.default)
    }
}

/// Returns a fixed label per exact text, or a default, and counts calls.
pub struct ScriptedClassifier {
    default: ModelLabel,
    labels: HashMap<String, ModelLabel>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new(default: ModelLabel) -> Self {
        Self {
            default,
            labels: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, text: &str, label: ModelLabel) -> Self {
        self.labels.insert(text.to_string(), label);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for ScriptedClassifier {
    async fn classify(&self, _ticker: &Ticker, text: &str) -> ModelLabel {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.labels.get(text).copied().unwrap_or(self.default)
    }
}
