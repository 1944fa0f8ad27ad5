//! Facts document parsing and per-language access.
//!
//! The document shape (legacy flat array vs. language-keyed object) is
//! resolved exactly once, at parse time; every accessor afterwards is
//! shape-agnostic.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::FactsError;
use crate::language::Language;

/// The parsed facts document.
///
/// Within a given language, identifiers are the zero-based positions in
/// that language's sequence. The store is never mutated after parsing, so
/// ids are stable for as long as the instance lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FactStore {
    /// Legacy single-language form: a flat array of fact strings.
    Flat(Vec<String>),
    /// Language code mapped to its ordered fact sequence.
    ByLanguage(BTreeMap<String, Vec<String>>),
}

impl FactStore {
    /// Parse a facts document from raw bytes.
    ///
    /// Empty or malformed input fails with [`FactsError::Parse`]; a store
    /// is either fully parsed or not returned at all.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FactsError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and parse the facts document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FactsError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let store = Self::from_slice(&bytes)?;
        debug!(path = %path.display(), "loaded facts document");
        Ok(store)
    }

    /// The fact sequence for `lang`.
    ///
    /// A flat store serves its single sequence regardless of language. A
    /// language-keyed store falls back to the default language when the
    /// requested key is absent, and to an empty sequence when even the
    /// default is missing; the selectors then report the empty store.
    pub fn facts_for(&self, lang: Language) -> &[String] {
        match self {
            FactStore::Flat(facts) => facts,
            FactStore::ByLanguage(by_lang) => by_lang
                .get(lang.as_str())
                .or_else(|| by_lang.get(Language::DEFAULT.as_str()))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}
