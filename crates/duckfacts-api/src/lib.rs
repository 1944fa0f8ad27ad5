#![deny(warnings)]
#![allow(missing_docs, dead_code)]
//! Duck Facts HTTP API
//!
//! A small axum router over the duckfacts-core data-access layer: random
//! selection, positional lookup, liveness, and a generated OpenAPI
//! document.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::response::Json;
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod types;

use config::AppConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state: immutable configuration plus process start
/// time for uptime reporting.
///
/// The facts document is reloaded and reparsed on every request, so no
/// parsed store lives here; nothing is shared mutably across requests.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    start_time: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config, start_time: Instant::now() }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Build the application router with tracing, CORS, and timeout middleware.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/facts/random", get(handlers::random_fact))
        .route("/api/facts/{id}", get(handlers::fact_by_id))
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(docs::ApiDoc::openapi()) }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .with_state(state)
}
