use std::sync::Arc;

use tracing::info;

use duckfacts_api::config::AppConfig;
use duckfacts_api::{AppState, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_env_filter("duckfacts=debug,info")
        .with_target(false)
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Duck Facts API"
    );

    let config = AppConfig::load().apply_profile();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = Arc::new(AppState::new(config));
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "Web server started successfully");
    axum::serve(listener, app).await?;

    Ok(())
}
