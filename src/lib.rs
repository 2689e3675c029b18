//! i18n auto-translate adapter
//!
//! Forwards strings to a pluggable translation provider, refusing requests
//! that should not reach it and cleaning up what comes back.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod processors;

// Re-export key types for convenience
pub use crate::core::{
    adapter::{contains_html_tag, sanitize, TranslationAdapter},
    config::AdapterConfig,
    environment::{AppEnv, ProcessEnvironment, RuntimeEnvironment},
    errors::{Result, TranslationError},
    locales::{SupportedLocales, DEFAULT_LOCALES},
    models::{Refusal, TranslationOutcome, TranslationRequest},
    provider::TranslationProvider,
};

pub use crate::processors::missing::{FillReport, MissingTranslationFiller, TranslationKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
