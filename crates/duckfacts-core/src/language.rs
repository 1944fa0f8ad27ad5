//! Supported language codes for the facts document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported two-letter language code.
///
/// The set is closed: anything outside it resolves to the default without
/// an error path. Callers therefore cannot distinguish "default requested"
/// from "unsupported code coerced to default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
}

impl Language {
    /// Every supported language, default first.
    pub const SUPPORTED: &'static [Language] = &[Language::En, Language::De];

    /// Language used when none is requested or the request is unsupported.
    pub const DEFAULT: Language = Language::En;

    /// The two-letter code as it appears in the facts document and on the
    /// wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Resolve a requested language code to a supported one.
    ///
    /// Exact case-sensitive match against the supported set; absent or
    /// unrecognized input silently degrades to the default. Never fails.
    pub fn resolve(requested: Option<&str>) -> Language {
        requested
            .and_then(|code| Self::SUPPORTED.iter().copied().find(|lang| lang.as_str() == code))
            .unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
