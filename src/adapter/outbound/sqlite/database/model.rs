//! Database model types for Diesel ORM.
//!
//! Timestamps are stored as RFC 3339 text.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{articles, sentiments};
use crate::domain::{Article, ArticleId, DedupKey, ModelLabel, SentimentRecord, Ticker};
use crate::error::{Error, Result};

/// Database row for an article.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArticleRow {
    pub ticker: String,
    pub dedup_key: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub fetched_at: String,
}

impl ArticleRow {
    /// Build a row for `article`, stamped with `fetched_at`.
    #[must_use]
    pub fn from_article(article: &Article, fetched_at: DateTime<Utc>) -> Self {
        Self {
            ticker: article.ticker().to_string(),
            dedup_key: article.key().to_string(),
            title: article.title.clone(),
            description: article.description.clone(),
            published_at: article.published_at.to_rfc3339(),
            fetched_at: fetched_at.to_rfc3339(),
        }
    }

    /// Convert back into a domain [`Article`].
    ///
    /// # Errors
    ///
    /// Returns an error if a stored identifier or timestamp is invalid.
    pub fn into_article(self) -> Result<Article> {
        Ok(Article::new(
            Ticker::try_new(&self.ticker)?,
            DedupKey::try_new(&self.dedup_key)?,
            self.title,
            self.description,
            parse_timestamp(&self.published_at)?,
        ))
    }
}

/// Database row for a sentiment record.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = sentiments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SentimentRow {
    pub ticker: String,
    pub dedup_key: String,
    pub lexicon_score: f64,
    pub model_label: String,
    pub scored_at: String,
}

impl From<&SentimentRecord> for SentimentRow {
    fn from(record: &SentimentRecord) -> Self {
        Self {
            ticker: record.article.ticker.to_string(),
            dedup_key: record.article.key.to_string(),
            lexicon_score: record.lexicon_score,
            model_label: record.model_label.as_str().to_string(),
            scored_at: record.scored_at.to_rfc3339(),
        }
    }
}

impl SentimentRow {
    /// Convert back into a domain [`SentimentRecord`].
    ///
    /// # Errors
    ///
    /// Returns an error if a stored identifier, label or timestamp is invalid.
    pub fn into_record(self) -> Result<SentimentRecord> {
        Ok(SentimentRecord {
            article: ArticleId::new(
                Ticker::try_new(&self.ticker)?,
                DedupKey::try_new(&self.dedup_key)?,
            ),
            lexicon_score: self.lexicon_score,
            model_label: self.model_label.parse::<ModelLabel>()?,
            scored_at: parse_timestamp(&self.scored_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid timestamp {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::article;

    #[test]
    fn article_row_converts_back() {
        let original = article("ACME", "a1", "Title", "Body");
        let row = ArticleRow::from_article(&original, Utc::now());

        assert_eq!(row.ticker, "ACME");
        assert_eq!(row.dedup_key, "a1");
        assert_eq!(row.into_article().unwrap(), original);
    }

    #[test]
    fn sentiment_row_stores_label_as_lowercase_text() {
        let record = SentimentRecord::new(
            article("ACME", "a1", "t", "").id,
            -0.25,
            ModelLabel::Bad,
        );
        let row = SentimentRow::from(&record);

        assert_eq!(row.model_label, "bad");
        let back = row.into_record().unwrap();
        assert_eq!(back.article, record.article);
        assert_eq!(back.model_label, ModelLabel::Bad);
    }

    #[test]
    fn unknown_stored_label_is_rejected() {
        let row = SentimentRow {
            ticker: "ACME".into(),
            dedup_key: "a1".into(),
            lexicon_score: 0.0,
            model_label: "meh".into(),
            scored_at: Utc::now().to_rfc3339(),
        };
        assert!(row.into_record().is_err());
    }

    #[test]
    fn bad_timestamp_is_a_parse_error() {
        assert!(matches!(parse_timestamp("yesterday"), Err(Error::Parse(_))));
    }
}
