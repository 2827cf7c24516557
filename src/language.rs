//! Language Tags
//!
//! The interpreter supports English and Hindi. The tag is supplied by the
//! caller (it is a UI setting, not detected from the text), and anything
//! unrecognized falls back to English.

use serde::{Deserialize, Serialize};

/// Supported interpreter languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Parse a language tag. Accepts bare codes ("en", "hi") and
    /// region-qualified ones ("en-US", "hi-IN"); unknown tags are English.
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.to_lowercase();
        if lower == "hi" || lower.starts_with("hi-") {
            Self::Hindi
        } else {
            Self::English
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }
}
