//! SQLite article store.

use chrono::Utc;
use diesel::prelude::*;

use super::database::connection::{with_conn, DbPool};
use super::database::model::ArticleRow;
use super::database::schema::articles;
use crate::domain::{Article, ArticleId, Ticker};
use crate::error::Result;
use crate::port::outbound::store::{ArticleStore, PutOutcome};

/// SQLite-backed [`ArticleStore`].
///
/// Rows are keyed by `(ticker, dedup_key)` and written with
/// `INSERT OR IGNORE`, so a repeated put leaves the first copy untouched.
#[derive(Clone)]
pub struct SqliteArticleStore {
    pool: DbPool,
}

impl SqliteArticleStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load a stored article.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub async fn get(&self, id: &ArticleId) -> Result<Option<Article>> {
        let key = (id.ticker.to_string(), id.key.to_string());
        let row = with_conn(&self.pool, move |conn| {
            articles::table
                .find(key)
                .select(ArticleRow::as_select())
                .first(conn)
                .optional()
        })
        .await?;
        row.map(ArticleRow::into_article).transpose()
    }

    /// Number of stored articles for `ticker`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn count(&self, ticker: &Ticker) -> Result<usize> {
        let ticker = ticker.to_string();
        let count: i64 = with_conn(&self.pool, move |conn| {
            articles::table
                .filter(articles::ticker.eq(ticker))
                .count()
                .get_result(conn)
        })
        .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

impl ArticleStore for SqliteArticleStore {
    async fn has(&self, id: &ArticleId) -> Result<bool> {
        let key = (id.ticker.to_string(), id.key.to_string());
        with_conn(&self.pool, move |conn| {
            diesel::select(diesel::dsl::exists(articles::table.find(key))).get_result(conn)
        })
        .await
    }

    async fn put(&self, article: &Article) -> Result<PutOutcome> {
        let row = ArticleRow::from_article(article, Utc::now());
        let inserted = with_conn(&self.pool, move |conn| {
            diesel::insert_or_ignore_into(articles::table)
                .values(&row)
                .execute(conn)
        })
        .await?;

        Ok(if inserted == 0 {
            PutOutcome::AlreadyExists
        } else {
            PutOutcome::Stored
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::open;
    use crate::testkit::domain::{article, ticker};

    fn store() -> SqliteArticleStore {
        SqliteArticleStore::new(open(":memory:").unwrap())
    }

    #[tokio::test]
    async fn put_then_has() {
        let store = store();
        let a1 = article("ACME", "a1", "Title", "Body");

        assert!(!store.has(&a1.id).await.unwrap());
        assert_eq!(store.put(&a1).await.unwrap(), PutOutcome::Stored);
        assert!(store.has(&a1.id).await.unwrap());
        assert_eq!(store.get(&a1.id).await.unwrap(), Some(a1));
    }

    #[tokio::test]
    async fn second_put_keeps_the_first_copy() {
        let store = store();
        let first = article("ACME", "a1", "First", "");
        let second = article("ACME", "a1", "Second", "");

        store.put(&first).await.unwrap();
        assert_eq!(store.put(&second).await.unwrap(), PutOutcome::AlreadyExists);

        let stored = store.get(&first.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "First");
        assert_eq!(store.count(&ticker("ACME")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn same_key_under_two_tickers_is_two_articles() {
        let store = store();
        store.put(&article("ACME", "shared", "t", "")).await.unwrap();
        store.put(&article("GLOBEX", "shared", "t", "")).await.unwrap();

        assert_eq!(store.count(&ticker("ACME")).await.unwrap(), 1);
        assert_eq!(store.count(&ticker("GLOBEX")).await.unwrap(), 1);
    }
}
