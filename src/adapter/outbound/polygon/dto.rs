//! Wire types for the Polygon `/v2/reference/news` endpoint.
//!
//! Every field is optional on the wire; missing text becomes an empty
//! string and records without an `id` are dropped.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Article, DedupKey, Ticker};

/// Status value of a successful response.
pub(super) const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
pub(super) struct NewsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<NewsItem>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewsResponse {
    /// Human-readable reason for a non-OK response.
    pub fn failure_reason(&self) -> String {
        let detail = self
            .error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("no details");
        format!("status {}: {detail}", self.status)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct NewsItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_utc: Option<String>,
}

impl NewsItem {
    /// Convert into an [`Article`] for `ticker`, or `None` without an id.
    pub fn into_article(self, ticker: &Ticker, fetched_at: DateTime<Utc>) -> Option<Article> {
        let Some(key) = self.id.as_deref().and_then(|id| DedupKey::try_new(id).ok()) else {
            debug!(%ticker, title = ?self.title, "Dropping article without id");
            return None;
        };
        let published_at = self
            .published_utc
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map_or(fetched_at, |ts| ts.with_timezone(&Utc));

        Some(Article::new(
            ticker.clone(),
            key,
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default(),
            published_at,
        ))
    }
}
