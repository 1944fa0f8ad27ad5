//! Request handlers composing the core data-access layer.
//!
//! Per request: validate (id endpoint only) → resolve language → load and
//! parse the facts document → select → respond. The document is re-read on
//! every request; requests share no mutable state.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::debug;

use duckfacts_core::{FactStore, FactsError, Language, ident, select};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::{DuckFact, FactQuery, HealthResponse};

async fn load_store(state: &AppState) -> Result<FactStore, ApiError> {
    let bytes = tokio::fs::read(&state.config.data.facts_path)
        .await
        .map_err(FactsError::from)?;
    Ok(FactStore::from_slice(&bytes)?)
}

/// GET /api/facts/random
#[utoipa::path(
    get,
    path = "/api/facts/random",
    tag = "facts",
    params(FactQuery),
    responses(
        (status = 200, description = "A randomly selected duck fact", body = DuckFact),
        (status = 500, description = "Facts document unreadable, corrupt, or empty", body = crate::error::ErrorBody),
    )
)]
pub async fn random_fact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FactQuery>,
) -> ApiResult<Json<DuckFact>> {
    let lang = Language::resolve(query.lang.as_deref());
    let store = load_store(&state).await?;
    let fact = select::random_fact(&store, lang)?;
    debug!(id = fact.id, lang = %fact.lang, "serving random fact");
    Ok(Json(fact.into()))
}

/// GET /api/facts/{id}
#[utoipa::path(
    get,
    path = "/api/facts/{id}",
    tag = "facts",
    params(
        ("id" = String, Path, description = "Zero-based fact identifier"),
        FactQuery,
    ),
    responses(
        (status = 200, description = "The fact at the requested position", body = DuckFact),
        (status = 400, description = "Identifier is not integer-formatted", body = crate::error::ErrorBody),
        (status = 404, description = "Identifier outside the store bounds", body = crate::error::ErrorBody),
        (status = 500, description = "Facts document unreadable or corrupt", body = crate::error::ErrorBody),
    )
)]
pub async fn fact_by_id(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Query(query): Query<FactQuery>,
) -> ApiResult<Json<DuckFact>> {
    // Format validation happens before any file I/O; a malformed token
    // must never trigger a load.
    let id = ident::parse_id(&token)?;
    let lang = Language::resolve(query.lang.as_deref());
    let store = load_store(&state).await?;
    let fact = select::fact_by_id(&store, lang, id)?;
    debug!(id = fact.id, lang = %fact.lang, "serving fact by id");
    Ok(Json(fact.into()))
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
    })
}
