use course_relay::bootstrap;
use course_relay::config::Config;
use course_relay::infrastructure::http::router::build_router;
use course_relay::infrastructure::observability;
use course_relay::infrastructure::persistence::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init()?;

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Configuration loaded");

    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    db.run_migrations().await?;
    tracing::info!("Database schema applied");

    // Build application state; fails if the cache is unreachable
    let state = match bootstrap::build_app_state(db, &config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize services: {}", e);
            return Err(e);
        }
    };

    let app = build_router(state);

    let addr = config.server_address();
    tracing::info!("Server starting on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
