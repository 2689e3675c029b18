//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::locales::SupportedLocales;

/// Configuration for the translation adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Google Translate API key
    #[serde(default)]
    pub google_translate_api_key: Option<String>,
    /// Locales the adapter will translate between
    #[serde(default)]
    pub supported_locales: SupportedLocales,
}

impl AdapterConfig {
    /// Create a config with the default locale set
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            google_translate_api_key: api_key,
            supported_locales: SupportedLocales::default(),
        }
    }

    /// Replace the supported locale set
    pub fn with_locales(mut self, locales: SupportedLocales) -> Self {
        self.supported_locales = locales;
        self
    }

    /// API key, with blank values treated as absent
    pub fn api_key(&self) -> Option<&str> {
        self.google_translate_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_translate_api_key = lookup("GOOGLE_TRANSLATE_API_KEY")
            .filter(|key| !key.trim().is_empty());

        let supported_locales = match lookup("SUPPORTED_LOCALES") {
            Some(list) => {
                let codes: Vec<&str> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .collect();
                if codes.is_empty() {
                    return Err(TranslationError::config(
                        "SUPPORTED_LOCALES is set but lists no locales",
                    ));
                }
                SupportedLocales::from_codes(codes)
            }
            None => SupportedLocales::default(),
        };

        Ok(Self {
            google_translate_api_key,
            supported_locales,
        })
    }

    /// Load `.env` then read configuration from the environment
    pub fn load() -> Result<Self> {
        // Missing .env is fine
        dotenvy::dotenv().ok();

        let config = Self::from_env()?;
        config.validate()?;

        info!(
            "Loaded translation config: {} locales, api key {}",
            config.supported_locales.len(),
            if config.api_key().is_some() { "present" } else { "absent" }
        );

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| TranslationError::FileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.supported_locales.is_empty() {
            return Err(TranslationError::config("at least one supported locale is required"));
        }

        if self.supported_locales.iter().any(|code| code.trim().is_empty()) {
            return Err(TranslationError::config("locale codes must not be blank"));
        }

        if self.api_key().is_none() {
            warn!("No Google Translate API key configured");
        }

        Ok(())
    }
}
