//! News articles as fetched from a provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ArticleId, DedupKey, Ticker};

/// A news article fetched for one ticker. Never mutated after fetch.
///
/// Providers map missing text fields to empty strings, so an article with
/// no usable text is representable and scores as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
}

impl Article {
    #[must_use]
    pub fn new(
        ticker: Ticker,
        key: DedupKey,
        title: impl Into<String>,
        description: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ArticleId::new(ticker, key),
            title: title.into(),
            description: description.into(),
            published_at,
        }
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.id.ticker
    }

    #[must_use]
    pub fn key(&self) -> &DedupKey {
        &self.id.key
    }

    /// Title and description joined by a single space, skipping blank parts.
    #[must_use]
    pub fn text(&self) -> String {
        [self.title.trim(), self.description.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when the article carries any text worth classifying.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.title.trim().is_empty() || !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str) -> Article {
        Article::new(
            Ticker::try_new("ACME").unwrap(),
            DedupKey::try_new("a1").unwrap(),
            title,
            description,
            Utc::now(),
        )
    }

    #[test]
    fn text_joins_title_and_description() {
        let a = article("Acme beats estimates", " Revenue up 20%. ");
        assert_eq!(a.text(), "Acme beats estimates Revenue up 20%.");
        assert!(a.has_text());
    }

    #[test]
    fn text_skips_missing_parts() {
        assert_eq!(article("", "Only a description").text(), "Only a description");
        assert_eq!(article("Only a title", "  ").text(), "Only a title");
    }

    #[test]
    fn empty_article_has_no_text() {
        let a = article(" ", "");
        assert_eq!(a.text(), "");
        assert!(!a.has_text());
    }
}
