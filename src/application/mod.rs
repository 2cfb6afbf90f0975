//! Application services: the per-ticker sentiment pipeline and the report.

pub mod aggregation;
pub mod classifier;
pub mod pipeline;
pub mod report;
pub mod runner;

pub use aggregation::WeightedMeanPolicy;
pub use classifier::{ClassifierSettings, LlmClassifier};
pub use pipeline::{TickerPipeline, TickerRun};
pub use report::{Report, ReportAggregator, ReportSummary, TickerScore};
pub use runner::SentimentRunner;
