//! In-memory [`ArticleStore`] and [`ScoreStore`] implementations.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::domain::{Article, ArticleId, SentimentRecord, SentimentTally, Ticker};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ArticleStore, PutOutcome, ScoreStore};

/// Article store backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryArticleStore {
    articles: Mutex<HashMap<ArticleId, Article>>,
}

impl MemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.articles.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.articles.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArticleStore for MemoryArticleStore {
    fn has(&self, id: &ArticleId) -> impl Future<Output = Result<bool>> + Send {
        let found = self.contains(id);
        async move { Ok(found) }
    }

    fn put(&self, article: &Article) -> impl Future<Output = Result<PutOutcome>> + Send {
        let outcome = {
            let mut articles = self.articles.lock();
            if articles.contains_key(&article.id) {
                PutOutcome::AlreadyExists
            } else {
                articles.insert(article.id.clone(), article.clone());
                PutOutcome::Stored
            }
        };
        async move { Ok(outcome) }
    }
}

/// Score store backed by a `HashMap`, with switchable write failures.
#[derive(Default)]
pub struct MemoryScoreStore {
    records: Mutex<HashMap<ArticleId, SentimentRecord>>,
    fail_writes: AtomicBool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail with [`Error::Database`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn record(&self, id: &ArticleId) -> Option<SentimentRecord> {
        self.records.lock().get(id).cloned()
    }

    pub fn snapshot(&self) -> HashMap<ArticleId, SentimentRecord> {
        self.records.lock().clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn has(&self, id: &ArticleId) -> impl Future<Output = Result<bool>> + Send {
        let found = self.records.lock().contains_key(id);
        async move { Ok(found) }
    }

    fn put(&self, record: &SentimentRecord) -> impl Future<Output = Result<()>> + Send {
        let result = if self.fail_writes.load(Ordering::SeqCst) {
            Err(Error::Database("writes disabled".into()))
        } else {
            self.records
                .lock()
                .insert(record.article.clone(), record.clone());
            Ok(())
        };
        async move { result }
    }

    fn tally(&self, ticker: &Ticker) -> impl Future<Output = Result<SentimentTally>> + Send {
        let tally = {
            let records = self.records.lock();
            SentimentTally::from_records(records.values().filter(|r| &r.article.ticker == ticker))
        };
        async move { Ok(tally) }
    }
}
