//! Report output configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Rendering used for the report file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// `[report]` section. The report always goes to stdout; `output_path`
/// additionally writes it to a file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_path: Option<PathBuf>,
    pub format: ReportFormat,
}
