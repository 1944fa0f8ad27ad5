#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the Duck Facts service.
//!
//! This crate provides the data-access and validation layer: parsing the
//! facts document, resolving language codes, selecting facts at random or
//! by position, and strict identifier validation. It has no HTTP or
//! async-runtime dependencies; the API crate composes these pieces per
//! request.

/// Error taxonomy shared across the service
pub mod error;
/// Strict integer identifier validation
pub mod ident;
/// Supported language codes and silent-fallback resolution
pub mod language;
/// Random and positional fact selection
pub mod select;
/// Facts document parsing and per-language access
pub mod store;
/// Core domain types
pub mod types;

// Re-export the types the API layer works with directly
pub use error::FactsError;
pub use language::Language;
pub use store::FactStore;
pub use types::Fact;
