//! Generated OpenAPI document, served at /api-docs/openapi.json.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use crate::types::{DuckFact, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Duck Facts API",
        description = "A REST API that serves interesting and educational facts about ducks in multiple languages.",
        license(name = "MIT")
    ),
    paths(handlers::random_fact, handlers::fact_by_id, handlers::health),
    components(schemas(DuckFact, HealthResponse, ErrorBody)),
    tags(
        (name = "facts", description = "Duck facts endpoints"),
        (name = "health", description = "Service liveness"),
    )
)]
pub struct ApiDoc;
