//! SQLite sentiment score store.

use diesel::prelude::*;

use super::database::connection::{with_conn, DbPool};
use super::database::model::SentimentRow;
use super::database::schema::sentiments;
use crate::domain::{ArticleId, ModelLabel, SentimentRecord, SentimentTally, Ticker};
use crate::error::{Error, Result};
use crate::port::outbound::store::ScoreStore;

/// SQLite-backed [`ScoreStore`].
///
/// Records reference their article through a foreign key, so an article
/// must be stored before its record.
#[derive(Clone)]
pub struct SqliteScoreStore {
    pool: DbPool,
}

impl SqliteScoreStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load the record for one article.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub async fn get(&self, id: &ArticleId) -> Result<Option<SentimentRecord>> {
        let key = (id.ticker.to_string(), id.key.to_string());
        let row = with_conn(&self.pool, move |conn| {
            sentiments::table
                .find(key)
                .select(SentimentRow::as_select())
                .first(conn)
                .optional()
        })
        .await?;
        row.map(SentimentRow::into_record).transpose()
    }

    /// Every ticker with at least one record, in alphabetical order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored ticker is invalid.
    pub async fn tickers(&self) -> Result<Vec<Ticker>> {
        let symbols: Vec<String> = with_conn(&self.pool, |conn| {
            sentiments::table
                .select(sentiments::ticker)
                .distinct()
                .order(sentiments::ticker.asc())
                .load(conn)
        })
        .await?;
        symbols
            .into_iter()
            .map(|s| Ticker::try_new(s).map_err(Error::from))
            .collect()
    }
}

impl ScoreStore for SqliteScoreStore {
    async fn has(&self, id: &ArticleId) -> Result<bool> {
        let key = (id.ticker.to_string(), id.key.to_string());
        with_conn(&self.pool, move |conn| {
            diesel::select(diesel::dsl::exists(sentiments::table.find(key))).get_result(conn)
        })
        .await
    }

    async fn put(&self, record: &SentimentRecord) -> Result<()> {
        let row = SentimentRow::from(record);
        with_conn(&self.pool, move |conn| {
            diesel::replace_into(sentiments::table)
                .values(&row)
                .execute(conn)
        })
        .await?;
        Ok(())
    }

    async fn tally(&self, ticker: &Ticker) -> Result<SentimentTally> {
        let ticker = ticker.to_string();
        let rows: Vec<(f64, String)> = with_conn(&self.pool, move |conn| {
            sentiments::table
                .filter(sentiments::ticker.eq(ticker))
                .select((sentiments::lexicon_score, sentiments::model_label))
                .load(conn)
        })
        .await?;

        let mut tally = SentimentTally::default();
        for (score, label) in rows {
            tally.add(score, label.parse::<ModelLabel>()?);
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::open;
    use crate::adapter::outbound::sqlite::SqliteArticleStore;
    use crate::application::WeightedMeanPolicy;
    use crate::domain::TickerAggregate;
    use crate::port::outbound::store::ArticleStore;
    use crate::testkit::domain::{article, ticker};

    fn stores() -> (SqliteArticleStore, SqliteScoreStore) {
        let pool = open(":memory:").unwrap();
        (SqliteArticleStore::new(pool.clone()), SqliteScoreStore::new(pool))
    }

    #[tokio::test]
    async fn record_requires_a_stored_article() {
        let (_, scores) = stores();
        let orphan = SentimentRecord::new(
            article("ACME", "missing", "t", "").id,
            0.1,
            ModelLabel::Good,
        );

        let err = scores.put(&orphan).await.unwrap_err();

        assert!(matches!(err, Error::Database(_)));
        assert!(!scores.has(&orphan.article).await.unwrap());
    }

    #[tokio::test]
    async fn put_is_last_write_wins() {
        let (articles, scores) = stores();
        let a1 = article("ACME", "a1", "t", "");
        articles.put(&a1).await.unwrap();

        scores
            .put(&SentimentRecord::new(a1.id.clone(), 0.1, ModelLabel::Good))
            .await
            .unwrap();
        scores
            .put(&SentimentRecord::new(a1.id.clone(), -0.3, ModelLabel::Bad))
            .await
            .unwrap();

        let stored = scores.get(&a1.id).await.unwrap().unwrap();
        assert_eq!(stored.lexicon_score, -0.3);
        assert_eq!(stored.model_label, ModelLabel::Bad);
        assert_eq!(scores.tally(&ticker("ACME")).await.unwrap().count, 1);
    }

    #[tokio::test]
    async fn tally_sums_only_the_requested_ticker() {
        let (articles, scores) = stores();
        for (symbol, key, score, label) in [
            ("ACME", "a1", 0.4, ModelLabel::Good),
            ("ACME", "a2", -0.2, ModelLabel::Unknown),
            ("GLOBEX", "g1", 0.9, ModelLabel::Good),
        ] {
            let a = article(symbol, key, "t", "");
            articles.put(&a).await.unwrap();
            scores
                .put(&SentimentRecord::new(a.id, score, label))
                .await
                .unwrap();
        }

        let tally = scores.tally(&ticker("ACME")).await.unwrap();

        assert_eq!(tally.count, 2);
        assert!((tally.lexicon_sum - 0.2).abs() < 1e-12);
        assert_eq!(tally.good, 1);
        assert_eq!(tally.unknown, 1);
        assert_eq!(
            scores.tickers().await.unwrap(),
            vec![ticker("ACME"), ticker("GLOBEX")]
        );
    }

    #[tokio::test]
    async fn aggregate_of_unknown_ticker_is_neutral() {
        let (_, scores) = stores();
        let policy = WeightedMeanPolicy::default();

        let aggregate = scores.aggregate(&ticker("NONE"), &policy).await.unwrap();

        assert_eq!(aggregate, TickerAggregate::neutral(ticker("NONE")));
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected_by_the_schema() {
        let (articles, scores) = stores();
        let a1 = article("ACME", "a1", "t", "");
        articles.put(&a1).await.unwrap();

        let result = scores
            .put(&SentimentRecord::new(a1.id, 1.5, ModelLabel::Good))
            .await;

        assert!(result.is_err());
    }
}
