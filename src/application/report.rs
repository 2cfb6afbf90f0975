//! Report assembly and rendering.
//!
//! Purely presentational: turns the per-ticker runs of a sentiment run into
//! a [`Report`] that renders as a text table plus summary, or as JSON.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::pipeline::TickerRun;
use crate::domain::Ticker;
use crate::error::Result;

/// A ticker paired with its combined score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerScore {
    pub ticker: Ticker,
    pub score: f64,
}

/// Run-wide figures printed under the per-ticker table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub tickers: usize,
    pub articles: usize,
    pub newly_scored: usize,
    pub fetch_failures: usize,
    /// Mean combined score over tickers that have at least one article.
    pub mean_score: Option<f64>,
    pub most_positive: Option<TickerScore>,
    pub most_negative: Option<TickerScore>,
}

impl ReportSummary {
    fn from_runs(runs: &[TickerRun]) -> Self {
        let with_articles: Vec<&TickerRun> =
            runs.iter().filter(|r| r.aggregate.count > 0).collect();

        let mean_score = if with_articles.is_empty() {
            None
        } else {
            let total: f64 = with_articles.iter().map(|r| r.aggregate.score).sum();
            Some(total / with_articles.len() as f64)
        };

        // Strict comparisons keep the first ticker in input order on ties.
        let mut most_positive: Option<&TickerRun> = None;
        let mut most_negative: Option<&TickerRun> = None;
        for run in &with_articles {
            if most_positive.map_or(true, |best| run.aggregate.score > best.aggregate.score) {
                most_positive = Some(run);
            }
            if most_negative.map_or(true, |worst| run.aggregate.score < worst.aggregate.score) {
                most_negative = Some(run);
            }
        }
        let to_score = |run: &TickerRun| TickerScore {
            ticker: run.aggregate.ticker.clone(),
            score: run.aggregate.score,
        };

        Self {
            tickers: runs.len(),
            articles: runs.iter().map(|r| r.aggregate.count).sum(),
            newly_scored: runs.iter().map(|r| r.scored).sum(),
            fetch_failures: runs.iter().filter(|r| r.fetch_error.is_some()).count(),
            mean_score,
            most_positive: most_positive.map(to_score),
            most_negative: most_negative.map(to_score),
        }
    }
}

/// The final output of a sentiment run. Rows keep the input ticker order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<TickerRun>,
    pub summary: ReportSummary,
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Articles")]
    articles: usize,
    #[tabled(rename = "New")]
    new: usize,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl From<&TickerRun> for ReportRow {
    fn from(run: &TickerRun) -> Self {
        let note = match (&run.fetch_error, run.aggregate.count) {
            (Some(error), _) => format!("fetch failed: {error}"),
            (None, 0) => "no articles".to_string(),
            (None, _) => String::new(),
        };
        Self {
            ticker: run.aggregate.ticker.to_string(),
            articles: run.aggregate.count,
            new: run.scored,
            score: format_score(run.aggregate.score),
            note,
        }
    }
}

fn format_score(score: f64) -> String {
    format!("{score:+.4}")
}

impl Report {
    /// Render the report as plain text: header, one row per ticker, summary.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Sentiment report ({})",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out);

        let rows: Vec<ReportRow> = self.rows.iter().map(ReportRow::from).collect();
        let _ = writeln!(out, "{}", Table::new(rows).with(Style::psql()));
        let _ = writeln!(out);

        let s = &self.summary;
        let _ = writeln!(
            out,
            "Tickers: {} | Articles: {} | Newly scored: {} | Fetch failures: {}",
            s.tickers, s.articles, s.newly_scored, s.fetch_failures
        );
        let _ = writeln!(
            out,
            "Mean score: {}",
            s.mean_score.map_or_else(|| "n/a".to_string(), format_score)
        );
        if let Some(best) = &s.most_positive {
            let _ = writeln!(
                out,
                "Most positive: {} ({})",
                best.ticker,
                format_score(best.score)
            );
        }
        if let Some(worst) = &s.most_negative {
            let _ = writeln!(
                out,
                "Most negative: {} ({})",
                worst.ticker,
                format_score(worst.score)
            );
        }
        out
    }

    /// Render the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Combines per-ticker runs into the final [`Report`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAggregator;

impl ReportAggregator {
    /// Build a report stamped with the current time.
    #[must_use]
    pub fn build(runs: Vec<TickerRun>) -> Report {
        Self::build_at(runs, Utc::now())
    }

    /// Build a report with an explicit timestamp.
    #[must_use]
    pub fn build_at(runs: Vec<TickerRun>, generated_at: DateTime<Utc>) -> Report {
        let summary = ReportSummary::from_runs(&runs);
        Report {
            generated_at,
            rows: runs,
            summary,
        }
    }
}
