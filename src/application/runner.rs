//! Runs the pipeline across a ticker list with bounded parallelism.

use std::collections::HashSet;

use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{info, warn};

use super::pipeline::{TickerPipeline, TickerRun};
use crate::domain::Ticker;
use crate::error::Result;
use crate::port::outbound::store::{ArticleStore, ScoreStore};

/// Drives [`TickerPipeline`] over every ticker of a run.
///
/// Up to `concurrency` tickers are in flight at once; results always come
/// back in input order. Each ticker is handled by exactly one task, so
/// writes for a given `(ticker, dedup_key)` never race.
pub struct SentimentRunner<A, S> {
    pipeline: TickerPipeline<A, S>,
    concurrency: usize,
}

impl<A, S> SentimentRunner<A, S>
where
    A: ArticleStore,
    S: ScoreStore,
{
    /// `concurrency` of 1 processes tickers strictly one after another.
    #[must_use]
    pub fn new(pipeline: TickerPipeline<A, S>, concurrency: usize) -> Self {
        Self {
            pipeline,
            concurrency: concurrency.max(1),
        }
    }

    /// Process all tickers and return one [`TickerRun`] per distinct ticker,
    /// in first-occurrence order.
    ///
    /// # Errors
    ///
    /// Stops at the first storage failure; no partial result is returned.
    pub async fn run(&self, tickers: &[Ticker]) -> Result<Vec<TickerRun>> {
        let tickers = unique(tickers);
        info!(
            tickers = tickers.len(),
            concurrency = self.concurrency,
            "Starting sentiment run"
        );

        let runs: Vec<TickerRun> = stream::iter(tickers.iter().map(|t| self.pipeline.run(t)))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let scored: usize = runs.iter().map(|r| r.scored).sum();
        info!(tickers = runs.len(), scored, "Sentiment run finished");
        Ok(runs)
    }
}

/// Drop repeated tickers, keeping the first occurrence.
fn unique(tickers: &[Ticker]) -> Vec<Ticker> {
    let mut seen = HashSet::with_capacity(tickers.len());
    let mut out = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        if seen.insert(ticker) {
            out.push(ticker.clone());
        } else {
            warn!(%ticker, "Duplicate ticker ignored");
        }
    }
    out
}
