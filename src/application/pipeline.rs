//! Per-ticker sentiment pipeline.
//!
//! For one ticker: fetch candidates, skip articles that already have a
//! sentiment record, score the rest with both the lexicon scorer and the
//! model classifier, persist, then aggregate everything stored for the
//! ticker.
//!
//! The skip gate is [`ScoreStore::has`], not [`ArticleStore::has`]: an
//! article stored by a run that was interrupted before its record was
//! written is scored on the next run.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    AggregationPolicy, Article, LexiconBand, ModelLabel, SentimentRecord, Ticker,
    TickerAggregate,
};
use crate::error::Result;
use crate::port::outbound::classifier::SentimentClassifier;
use crate::port::outbound::news::NewsProvider;
use crate::port::outbound::scorer::LexiconScorer;
use crate::port::outbound::store::{ArticleStore, PutOutcome, ScoreStore};

/// Outcome of one ticker's pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerRun {
    /// Aggregate over every record stored for the ticker, old and new.
    pub aggregate: TickerAggregate,
    /// Candidates returned by the news provider.
    pub fetched: usize,
    /// Articles scored during this run.
    pub scored: usize,
    /// Candidates skipped as already scored or duplicated in the batch.
    pub skipped: usize,
    /// Set when the news fetch failed; the aggregate is then neutral.
    pub fetch_error: Option<String>,
}

impl TickerRun {
    /// Run result for a ticker whose fetch failed.
    #[must_use]
    pub fn fetch_failed(ticker: Ticker, error: impl Into<String>) -> Self {
        Self {
            aggregate: TickerAggregate::neutral(ticker),
            fetched: 0,
            scored: 0,
            skipped: 0,
            fetch_error: Some(error.into()),
        }
    }

    /// Row for an aggregate read back from storage without fetching.
    #[must_use]
    pub fn from_stored(aggregate: TickerAggregate) -> Self {
        Self {
            fetched: 0,
            scored: 0,
            skipped: 0,
            fetch_error: None,
            aggregate,
        }
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.aggregate.ticker
    }
}

/// Drives a single ticker from fetch to aggregate.
pub struct TickerPipeline<A, S> {
    articles: Arc<A>,
    scores: Arc<S>,
    news: Arc<dyn NewsProvider>,
    lexicon: Arc<dyn LexiconScorer>,
    classifier: Arc<dyn SentimentClassifier>,
    policy: Arc<dyn AggregationPolicy>,
}

impl<A, S> TickerPipeline<A, S>
where
    A: ArticleStore,
    S: ScoreStore,
{
    #[must_use]
    pub fn new(
        articles: Arc<A>,
        scores: Arc<S>,
        news: Arc<dyn NewsProvider>,
        lexicon: Arc<dyn LexiconScorer>,
        classifier: Arc<dyn SentimentClassifier>,
        policy: Arc<dyn AggregationPolicy>,
    ) -> Self {
        Self {
            articles,
            scores,
            news,
            lexicon,
            classifier,
            policy,
        }
    }

    /// Process one ticker.
    ///
    /// A failed fetch is recovered into a neutral [`TickerRun`]; classifier
    /// failures surface as [`ModelLabel::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns an error only when a store fails. Storage errors are fatal
    /// for the whole run.
    pub async fn run(&self, ticker: &Ticker) -> Result<TickerRun> {
        let candidates = match self.news.fetch(ticker).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(%ticker, provider = self.news.name(), error = %e, "News fetch failed");
                return Ok(TickerRun::fetch_failed(ticker.clone(), e.to_string()));
            }
        };

        let fetched = candidates.len();
        let mut seen = HashSet::with_capacity(fetched);
        let mut scored = 0;
        let mut skipped = 0;

        for article in &candidates {
            if article.ticker() != ticker {
                debug!(
                    %ticker,
                    article = %article.id,
                    "Ignoring article fetched for another ticker"
                );
                skipped += 1;
                continue;
            }
            if !seen.insert(article.key().clone()) {
                skipped += 1;
                continue;
            }
            if self.scores.has(&article.id).await? {
                debug!(%ticker, key = %article.key(), "Already scored");
                skipped += 1;
                continue;
            }

            self.score_article(article).await?;
            scored += 1;
        }

        let aggregate = self.scores.aggregate(ticker, self.policy.as_ref()).await?;

        info!(
            %ticker,
            fetched,
            scored,
            skipped,
            articles = aggregate.count,
            score = aggregate.score,
            "Ticker processed"
        );

        Ok(TickerRun {
            aggregate,
            fetched,
            scored,
            skipped,
            fetch_error: None,
        })
    }

    /// Persist, score and record one new article, strictly in that order.
    async fn score_article(&self, article: &Article) -> Result<SentimentRecord> {
        if self.articles.put(article).await? == PutOutcome::AlreadyExists {
            debug!(article = %article.id, "Article stored earlier but never scored");
        }

        let text = article.text();
        let lexicon_score = self.lexicon.score(&text);
        let model_label = if article.has_text() {
            self.classifier.classify(article.ticker(), &text).await
        } else {
            ModelLabel::Unknown
        };

        let record = SentimentRecord::new(article.id.clone(), lexicon_score, model_label);
        self.scores.put(&record).await?;

        debug!(
            article = %article.id,
            lexicon_score = record.lexicon_score,
            band = %LexiconBand::from_score(record.lexicon_score),
            label = %model_label,
            "Article scored"
        );

        Ok(record)
    }
}
