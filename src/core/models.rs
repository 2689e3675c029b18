//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Locale the text is written in
    pub from_locale: String,
    /// Locale to translate into
    pub to_locale: String,
}

impl TranslationRequest {
    /// Create a new request
    pub fn new(
        text: impl Into<String>,
        from_locale: impl Into<String>,
        to_locale: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            from_locale: from_locale.into(),
            to_locale: to_locale.into(),
        }
    }
}

/// Why the adapter declined to produce a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Refusal {
    /// Source or target locale is not in the supported set
    UnsupportedLocale,
    /// Running under test; live translation is suppressed
    TestEnvironment,
    /// No API key configured while in development
    MissingApiKey,
    /// Text contains an HTML tag
    ContainsHtml,
    /// The provider reported a failure
    ProviderFailed,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::UnsupportedLocale => write!(f, "unsupported locale"),
            Refusal::TestEnvironment => write!(f, "test environment"),
            Refusal::MissingApiKey => write!(f, "missing api key"),
            Refusal::ContainsHtml => write!(f, "text contains html"),
            Refusal::ProviderFailed => write!(f, "provider failed"),
        }
    }
}

/// Result of a translation attempt.
///
/// `Refused` means the adapter would not (or could not) translate, while
/// `Unavailable` means the provider was asked and had nothing to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum TranslationOutcome {
    /// Sanitized provider output
    Translated(String),
    /// Translation was not attempted or the provider failed
    Refused(Refusal),
    /// Provider returned no result
    Unavailable,
}

impl TranslationOutcome {
    /// Translated text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Translated(text) => Some(text),
            _ => None,
        }
    }

    /// Consume the outcome and return the translated text, if any
    pub fn into_text(self) -> Option<String> {
        match self {
            TranslationOutcome::Translated(text) => Some(text),
            _ => None,
        }
    }

    /// Refusal reason, if the translation was refused
    pub fn refusal(&self) -> Option<Refusal> {
        match self {
            TranslationOutcome::Refused(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Whether the outcome is a refusal
    pub fn is_refused(&self) -> bool {
        matches!(self, TranslationOutcome::Refused(_))
    }

    /// Whether the provider returned nothing
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TranslationOutcome::Unavailable)
    }
}
