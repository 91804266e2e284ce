use crate::application::services::{AssignmentService, SyllabusService};
use crate::config::{CacheBackend, Config};
use crate::domain::ports::assignment_repository::AssignmentRepository;
use crate::domain::ports::cache_store::CacheStore;
use crate::domain::ports::course_api::CourseApi;
use crate::domain::ports::file_storage::FileStorage;
use crate::infrastructure::cache::{InMemoryCacheStore, RedisCacheStore};
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::CanvasClient;
use crate::infrastructure::storage::LocalFileStorage;
use std::sync::Arc;

/// Build the one cache handle the process uses.
///
/// An unreachable Redis is an error here; `main` treats it as fatal.
pub async fn build_cache(config: &Config) -> Result<Arc<dyn CacheStore>, Box<dyn std::error::Error>> {
    let cache: Arc<dyn CacheStore> = match config.cache_backend {
        CacheBackend::Redis => Arc::new(RedisCacheStore::connect(&config.redis_url).await?),
        CacheBackend::Memory => {
            tracing::info!("Using in-process cache");
            Arc::new(InMemoryCacheStore::new())
        }
    };
    Ok(cache)
}

pub async fn build_app_state(
    db: Database,
    config: &Config,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let cache = build_cache(config).await?;
    tracing::info!("Cache initialized ({:?})", config.cache_backend);

    let course_api = Arc::new(CanvasClient::new(
        &config.canvas_url,
        &config.canvas_token,
        config.canvas_term_id,
    )?);
    tracing::info!(
        "Course API client initialized for {} (term {})",
        config.canvas_url,
        config.canvas_term_id
    );

    let assignment_service = AssignmentService::new(
        course_api as Arc<dyn CourseApi>,
        Arc::new(db) as Arc<dyn AssignmentRepository>,
        cache,
    );

    tokio::fs::create_dir_all(&config.uploads_dir).await?;
    let syllabus_service = SyllabusService::new(
        Arc::new(LocalFileStorage::new(&config.uploads_dir)) as Arc<dyn FileStorage>,
    );
    tracing::info!("Uploads directory: {}", config.uploads_dir);

    if config.openai_api_key.is_some() {
        tracing::debug!("OPENAI_API_KEY is set but not used");
    }

    Ok(AppState {
        assignment_service,
        syllabus_service,
    })
}
