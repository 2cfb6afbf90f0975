//! Handler for the `check` command group.

use std::path::Path;

use super::output;
use crate::adapter::outbound::llm::{anthropic, openai};
use crate::adapter::outbound::polygon;
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration without running anything.
///
/// Missing API keys are reported as warnings: `report` works without them.
#[allow(clippy::result_large_err)]
pub fn execute_config(config_path: &Path) -> Result<()> {
    let exists = config_path.exists();
    let config = Config::load(config_path)?;

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    if exists {
        output::success("Configuration file is valid");
    } else {
        output::warning("Configuration file not found, using defaults");
    }

    output::section("Summary");
    output::field("Database", &config.database);
    output::field("Tickers", config.tickers.path.display());
    output::field("News", &config.news.base_url);
    output::field("LLM", format!("{} ({})", config.llm.provider.as_str(), config.llm.model()));
    output::field("Concurrency", config.pipeline.concurrency);
    output::field(
        "Weights",
        format!(
            "lexicon {} / model {}",
            config.pipeline.lexicon_weight, config.pipeline.model_weight
        ),
    );

    output::section("Environment");
    check_key(polygon::API_KEY_ENV);
    let llm_key = match config.llm.provider {
        LlmProvider::Anthropic => anthropic::API_KEY_ENV,
        LlmProvider::OpenAi => openai::API_KEY_ENV,
    };
    check_key(llm_key);

    output::success("Configuration check complete");
    Ok(())
}

fn check_key(name: &str) {
    if std::env::var(name).is_ok_and(|v| !v.trim().is_empty()) {
        output::success(&format!("{name} is set"));
    } else {
        output::warning(&format!("{name} is not set (required by `stocksent run`)"));
    }
}
