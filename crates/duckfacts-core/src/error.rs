//! Error taxonomy for the facts data-access layer.
//!
//! Format and range failures are deliberately separate variants: a
//! syntactically valid negative identifier must surface as `OutOfRange`,
//! never as `InvalidId`. The API layer maps these onto HTTP status codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactsError {
    /// The facts file could not be read from disk
    #[error("failed to read facts file: {0}")]
    Io(#[from] std::io::Error),

    /// The facts file contents are not a valid facts document
    #[error("facts file is not a valid facts document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The selected language has no facts to choose from
    #[error("no facts available for selection")]
    EmptyStore,

    /// A well-formed identifier outside the bounds of the loaded sequence
    #[error("fact id {id} is outside the store bounds (length {len})")]
    OutOfRange { id: i64, len: usize },

    /// An identifier token that is not strictly integer-formatted
    #[error("identifier token {token:?} is not an integer")]
    InvalidId { token: String },
}
