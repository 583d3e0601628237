// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use nhm_dashboard::infrastructure::config::load_config;
use nhm_dashboard::infrastructure::sample_data::InMemorySampleRepository;
use nhm_dashboard::presentation::app_state::AppState;
use nhm_dashboard::presentation::router::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_config()?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create repository (infrastructure layer)
    let repository = Arc::new(InMemorySampleRepository::new());

    // Create services and application state (application layer)
    let state = Arc::new(AppState::new(repository, config.dashboard.clone()));

    // Build router (presentation layer)
    let router = router(state, config.dashboard.compression);

    // Start server
    let addr = config.server.bind_addr()?;
    tracing::info!("Starting {} on {}", config.dashboard.title, addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
