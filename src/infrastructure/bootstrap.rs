//! Runtime wiring: turns a [`Config`] into a ready-to-run pipeline.
//!
//! Every collaborator is built here and passed in by constructor; nothing
//! below reads the environment except the `from_env` constructors of the
//! HTTP adapters.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::lexicon::VaderScorer;
use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::adapter::outbound::polygon::PolygonNews;
use crate::adapter::outbound::sqlite::{self, DbPool, SqliteArticleStore, SqliteScoreStore};
use crate::application::{LlmClassifier, SentimentRunner, TickerPipeline};
use crate::error::Result;
use crate::infrastructure::config::llm::LlmProvider;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::Llm;
use crate::port::outbound::news::NewsProvider;

/// Pipeline backed by the SQLite stores.
pub type SqlitePipeline = TickerPipeline<SqliteArticleStore, SqliteScoreStore>;

/// Runner backed by the SQLite stores.
pub type SqliteRunner = SentimentRunner<SqliteArticleStore, SqliteScoreStore>;

/// Open the configured database and apply pending migrations.
#[allow(clippy::result_large_err)]
pub fn open_database(config: &Config) -> Result<DbPool> {
    let pool = sqlite::open(&config.database)?;
    info!(database = %config.database, "Database ready");
    Ok(pool)
}

/// Build the LLM client for the configured provider.
///
/// # Errors
///
/// Returns an error if the provider's API key is not set.
#[allow(clippy::result_large_err)]
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn Llm>> {
    let client: Arc<dyn Llm> = match config.llm.provider {
        LlmProvider::Anthropic => {
            let c = &config.llm.anthropic;
            Arc::new(Anthropic::from_env(&c.model, c.max_tokens, c.temperature)?)
        }
        LlmProvider::OpenAi => {
            let c = &config.llm.openai;
            Arc::new(OpenAi::from_env(&c.model, c.max_tokens, c.temperature)?)
        }
    };

    info!(
        provider = client.name(),
        model = config.llm.model(),
        "LLM client initialized"
    );
    Ok(client)
}

/// Build the news provider.
///
/// # Errors
///
/// Returns an error if `POLYGON_API_KEY` is not set or the base URL is invalid.
#[allow(clippy::result_large_err)]
pub fn build_news_provider(config: &Config) -> Result<Arc<dyn NewsProvider>> {
    let news = &config.news;
    let client = PolygonNews::from_env(&news.base_url, news.limit, news.timeout())?;
    Ok(Arc::new(client))
}

/// Assemble a pipeline over `pool` from explicit news and LLM collaborators.
#[must_use]
pub fn build_pipeline(
    config: &Config,
    pool: DbPool,
    news: Arc<dyn NewsProvider>,
    llm: Arc<dyn Llm>,
) -> SqlitePipeline {
    let classifier = LlmClassifier::new(llm, config.pipeline.classifier_settings());
    TickerPipeline::new(
        Arc::new(SqliteArticleStore::new(pool.clone())),
        Arc::new(SqliteScoreStore::new(pool)),
        news,
        Arc::new(VaderScorer::new()),
        Arc::new(classifier),
        Arc::new(config.pipeline.policy()),
    )
}

/// Build the production runner: SQLite stores, Polygon news and the
/// configured LLM.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or an API key is missing.
#[allow(clippy::result_large_err)]
pub fn build_runner(config: &Config) -> Result<SqliteRunner> {
    let news = build_news_provider(config)?;
    let llm = build_llm_client(config)?;
    let pool = open_database(config)?;
    let pipeline = build_pipeline(config, pool, news, llm);
    Ok(SentimentRunner::new(pipeline, config.pipeline.concurrency))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::testkit::domain::{article, ticker};
    use crate::testkit::news::ScriptedNews;

    struct AlwaysGood;

    #[async_trait]
    impl Llm for AlwaysGood {
        fn name(&self) -> &'static str {
            "always-good"
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok("Good".into())
        }
    }

    fn memory_config() -> Config {
        Config {
            database: ":memory:".into(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn wired_pipeline_scores_and_persists() {
        let config = memory_config();
        let pool = open_database(&config).unwrap();
        let acme = ticker("ACME");
        let news = ScriptedNews::new().with_articles(
            &acme,
            vec![article("ACME", "a1", "Acme soars on record profits", "")],
        );

        let pipeline =
            build_pipeline(&config, pool.clone(), Arc::new(news), Arc::new(AlwaysGood));
        let run = pipeline.run(&acme).await.unwrap();

        assert_eq!(run.scored, 1);
        assert_eq!(run.aggregate.tally.good, 1);
        assert_eq!(SqliteArticleStore::new(pool).count(&acme).await.unwrap(), 1);
    }

    #[test]
    fn missing_provider_key_is_a_config_error() {
        let mut config = memory_config();
        config.llm.provider = LlmProvider::Anthropic;
        if std::env::var(crate::adapter::outbound::llm::anthropic::API_KEY_ENV).is_ok() {
            return;
        }
        assert!(build_llm_client(&config).is_err());
    }
}
