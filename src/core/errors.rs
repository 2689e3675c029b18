//! Error types for configuration and provider operations

use thiserror::Error;

/// Errors raised by the adapter's surrounding layers.
///
/// None of these ever escape [`TranslationAdapter::translate`]; a provider
/// error is turned into a refusal there.
///
/// [`TranslationAdapter::translate`]: crate::core::adapter::TranslationAdapter::translate
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The translation provider reported a failure
    #[error("Provider error: {message}")]
    ProviderError {
        /// Provider supplied description
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        /// Path of the file involved
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Shorthand for a provider failure
    pub fn provider(message: impl Into<String>) -> Self {
        TranslationError::ProviderError {
            message: message.into(),
        }
    }

    /// Shorthand for a configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        TranslationError::ConfigError {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
