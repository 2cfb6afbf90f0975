//! HTTP client for Polygon.io ticker news.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::dto::{NewsResponse, STATUS_OK};
use crate::domain::{Article, Ticker};
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::news::NewsProvider;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "POLYGON_API_KEY";

const NEWS_PATH: &str = "v2/reference/news";

/// [`NewsProvider`] backed by Polygon's reference news endpoint.
pub struct PolygonNews {
    client: Client,
    base_url: Url,
    api_key: String,
    limit: u32,
}

impl PolygonNews {
    /// Create a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        limit: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            limit,
        })
    }

    /// Create a client with the key from `POLYGON_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the client cannot be built.
    pub fn from_env(base_url: &str, limit: u32, timeout: Duration) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;
        Self::new(base_url, api_key, limit, timeout)
    }

    /// Request URL for `ticker`, including the API key.
    fn news_url(&self, ticker: &Ticker) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join(NEWS_PATH)?;
        url.query_pairs_mut()
            .append_pair("ticker", ticker.as_str())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    fn parse(ticker: &Ticker, status: reqwest::StatusCode, body: &str) -> Result<Vec<Article>> {
        let response: NewsResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                return Err(Error::Upstream {
                    provider: "polygon",
                    reason: format!("HTTP {status}"),
                })
            }
        };

        if !status.is_success() || response.status != STATUS_OK {
            return Err(Error::Upstream {
                provider: "polygon",
                reason: response.failure_reason(),
            });
        }

        let fetched_at = Utc::now();
        Ok(response
            .results
            .into_iter()
            .filter_map(|item| item.into_article(ticker, fetched_at))
            .collect())
    }
}

#[async_trait]
impl NewsProvider for PolygonNews {
    fn name(&self) -> &'static str {
        "polygon"
    }

    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<Article>> {
        let url = self.news_url(ticker)?;
        // The URL carries the API key; keep it out of errors and logs.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        let articles = Self::parse(ticker, status, &body)?;
        debug!(%ticker, count = articles.len(), "Fetched news");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::testkit::domain::ticker;

    fn client(base: &str) -> PolygonNews {
        PolygonNews::new(base, "secret", 50, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn url_carries_ticker_limit_and_key() {
        let url = client("https://api.polygon.io")
            .news_url(&ticker("ACME"))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.polygon.io/v2/reference/news?ticker=ACME&limit=50&apiKey=secret"
        );
    }

    #[test]
    fn url_keeps_a_base_path_prefix() {
        let url = client("http://localhost:9000/proxy")
            .news_url(&ticker("ACME"))
            .unwrap();
        assert!(url.as_str().starts_with("http://localhost:9000/proxy/v2/reference/news?"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PolygonNews::new("not a url", "k", 50, Duration::from_secs(1));
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn ok_status_yields_articles() {
        let body = r#"{"status": "OK", "results": [{"id": "a1", "title": "Up"}, {"title": "no id"}]}"#;
        let articles = PolygonNews::parse(&ticker("ACME"), StatusCode::OK, body).unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].ticker(), &ticker("ACME"));
    }

    #[test]
    fn non_ok_status_is_an_upstream_error() {
        let body = r#"{"status": "ERROR", "error": "Unknown API Key"}"#;
        let err = PolygonNews::parse(&ticker("ACME"), StatusCode::UNAUTHORIZED, body).unwrap_err();

        match err {
            Error::Upstream { provider, reason } => {
                assert_eq!(provider, "polygon");
                assert!(reason.contains("Unknown API Key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn delayed_status_is_not_ok() {
        let body = r#"{"status": "DELAYED", "results": [{"id": "a1"}]}"#;
        assert!(PolygonNews::parse(&ticker("ACME"), StatusCode::OK, body).is_err());
    }

    #[test]
    fn non_json_error_body_reports_the_http_status() {
        let err = PolygonNews::parse(&ticker("ACME"), StatusCode::BAD_GATEWAY, "<html>")
            .unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn malformed_success_body_is_a_json_error() {
        let err = PolygonNews::parse(&ticker("ACME"), StatusCode::OK, "{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
