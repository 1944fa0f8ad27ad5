//! Core domain types for the Duck Facts service.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A single fact record: its zero-based position within a language's
/// sequence, the text, and the language it was served in.
///
/// Constructed on each successful lookup; never persisted or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: usize,
    pub fact: String,
    pub lang: Language,
}
