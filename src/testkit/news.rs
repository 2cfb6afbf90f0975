//! Scripted [`NewsProvider`] for pipeline tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Article, Ticker};
use crate::error::{Error, Result};
use crate::port::outbound::news::NewsProvider;

/// A news provider with a fixed answer per ticker.
///
/// Unscripted tickers return no articles. Failures surface as
/// [`Error::Upstream`]. An optional per-ticker delay lets tests control
/// completion order.
#[derive(Default)]
pub struct ScriptedNews {
    articles: HashMap<Ticker, Vec<Article>>,
    failures: HashMap<Ticker, String>,
    delays: HashMap<Ticker, Duration>,
    calls: AtomicUsize,
}

impl ScriptedNews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(mut self, ticker: &Ticker, articles: Vec<Article>) -> Self {
        self.articles.insert(ticker.clone(), articles);
        self
    }

    pub fn with_failure(mut self, ticker: &Ticker, reason: &str) -> Self {
        self.failures.insert(ticker.clone(), reason.to_string());
        self
    }

    pub fn with_delay(mut self, ticker: &Ticker, delay: Duration) -> Self {
        self.delays.insert(ticker.clone(), delay);
        self
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsProvider for ScriptedNews {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(ticker) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(reason) = self.failures.get(ticker) {
            return Err(Error::Upstream {
                provider: "scripted",
                reason: reason.clone(),
            });
        }
        Ok(self.articles.get(ticker).cloned().unwrap_or_default())
    }
}
