mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::external::gemini::GeminiProvider;
use crate::external::newsapi::NewsApiProvider;
use crate::logging::{init_logging, LoggingConfig};
use crate::models::{BlogRecord, SummaryRecord};
use crate::services::alert_service::MarketAlertService;
use crate::services::blog_service::BlogService;
use crate::services::llm_service::LlmService;
use crate::services::rating_service::RatingService;
use crate::services::summary_service::SummaryService;
use crate::state::AppState;
use crate::store::{JsonFileSlot, MemorySlot, Record, RecordCollection, RecordSlot, BLOGS_SLOT, SUMMARIES_SLOT};

fn open_collection<R>(config: &AppConfig, name: &'static str) -> anyhow::Result<RecordCollection<R>>
where
    R: Record + serde::Serialize + serde::de::DeserializeOwned,
{
    let slot: Arc<dyn RecordSlot<R>> = match config.storage_backend {
        StorageBackend::File => {
            let slot = JsonFileSlot::new(&config.data_dir, name);
            info!("Storing {} in {}", name, slot.path().display());
            Arc::new(slot)
        }
        StorageBackend::Memory => Arc::new(MemorySlot::new()),
    };
    RecordCollection::load(name, slot).with_context(|| format!("failed to load {} records", name))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(
        "Storage backend: {:?} (data dir: {})",
        config.storage_backend,
        config.data_dir.display()
    );

    let gemini = GeminiProvider::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.model_timeout,
    )?;
    let news = NewsApiProvider::new(config.news_api_key.clone(), config.news_timeout)?;

    let llm = Arc::new(LlmService::new(Arc::new(gemini)));
    let rating = Arc::new(RatingService::new(llm.clone()));

    let blogs = open_collection::<BlogRecord>(&config, BLOGS_SLOT)?;
    let summaries = open_collection::<SummaryRecord>(&config, SUMMARIES_SLOT)?;

    let state = AppState {
        blogs: Arc::new(blogs),
        summaries: Arc::new(summaries),
        blog_service: Arc::new(BlogService::new(rating)),
        summary_service: Arc::new(SummaryService::new(llm.clone())),
        alert_service: Arc::new(MarketAlertService::new(
            Arc::new(news),
            llm,
            config.news_page_size,
            config.alert_cache_ttl,
        )),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("🚀 FinanceHub backend running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
