//! Wire types for the Duck Facts API with OpenAPI schema derivation.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use duckfacts_core::Fact;

/// A duck fact as served over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DuckFact {
    /// Zero-based identifier of the fact within its language's sequence
    #[schema(example = 42)]
    pub id: usize,

    /// The fact text
    #[schema(
        example = "Ducks have waterproof feathers thanks to an oil gland near their tails."
    )]
    pub fact: String,

    /// Language code the fact was served in
    #[schema(example = "en")]
    pub lang: String,
}

impl From<Fact> for DuckFact {
    fn from(fact: Fact) -> Self {
        Self { id: fact.id, fact: fact.fact, lang: fact.lang.as_str().to_string() }
    }
}

/// Query parameters shared by the fact endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FactQuery {
    /// Requested language code; unsupported codes silently fall back to
    /// the default
    #[param(example = "de")]
    pub lang: Option<String>,
}

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" when the service is able to respond
    #[schema(example = "healthy")]
    pub status: String,

    /// Service version
    pub version: String,

    /// Seconds since the process started
    pub uptime_seconds: u64,
}
