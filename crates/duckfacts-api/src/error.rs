//! HTTP error mapping for the Duck Facts API.
//!
//! The wire payload is deliberately terse: one fixed `error` message per
//! outcome. Underlying I/O and parse details are logged at the conversion
//! boundary and never reach the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use duckfacts_core::FactsError;

/// API error type with automatic HTTP status code mapping.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Identifier token is not integer-formatted (400 Bad Request)
    #[error("Invalid ID format")]
    InvalidId,

    /// Well-formed identifier outside the store bounds (404 Not Found)
    #[error("Fact not found")]
    NotFound,

    /// Store unreadable, corrupt, or empty (500 Internal Server Error)
    #[error("Failed to load facts")]
    LoadFailure,
}

impl ApiError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::LoadFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON-serializable error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Fixed message describing what went wrong
    #[schema(example = "Fact not found")]
    pub error: String,
}

impl From<FactsError> for ApiError {
    fn from(err: FactsError) -> Self {
        match err {
            FactsError::InvalidId { ref token } => {
                warn!(token = %token, "rejected malformed fact id");
                ApiError::InvalidId
            }
            FactsError::OutOfRange { id, len } => {
                warn!(id, len, "fact id out of range");
                ApiError::NotFound
            }
            FactsError::EmptyStore => {
                error!("fact store has no entries for the requested language");
                ApiError::LoadFailure
            }
            FactsError::Io(ref source) => {
                error!(%source, "failed to read facts file");
                ApiError::LoadFailure
            }
            FactsError::Parse(ref source) => {
                error!(%source, "facts file is not valid JSON");
                ApiError::LoadFailure
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_onto_http_outcomes() {
        assert_eq!(
            ApiError::from(FactsError::InvalidId { token: "1.5".to_string() }),
            ApiError::InvalidId
        );
        assert_eq!(
            ApiError::from(FactsError::OutOfRange { id: -1, len: 3 }),
            ApiError::NotFound
        );
        assert_eq!(ApiError::from(FactsError::EmptyStore), ApiError::LoadFailure);
    }

    #[test]
    fn status_codes_match_the_contract() {
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::LoadFailure.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_never_carry_internal_details() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "/secret/path missing");
        let err = ApiError::from(FactsError::Io(io));
        assert_eq!(err.to_string(), "Failed to load facts");
    }
}
