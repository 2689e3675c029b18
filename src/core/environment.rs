//! Runtime environment detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::TranslationError;

/// Environment variable read by [`ProcessEnvironment::default`]
pub const DEFAULT_ENV_VAR: &str = "APP_ENV";

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    /// Local development
    Development,
    /// Automated test run
    Test,
    /// Everything else
    Production,
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnv::Development => write!(f, "development"),
            AppEnv::Test => write!(f, "test"),
            AppEnv::Production => write!(f, "production"),
        }
    }
}

impl FromStr for AppEnv {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "test" => Ok(AppEnv::Test),
            "production" | "prod" | "staging" => Ok(AppEnv::Production),
            other => Err(TranslationError::config(format!(
                "unknown environment: {}",
                other
            ))),
        }
    }
}

/// Source of the current runtime environment.
///
/// Queried on every translation, so implementations must not cache.
pub trait RuntimeEnvironment: Send + Sync {
    /// Current environment
    fn current(&self) -> AppEnv;

    /// Running under automated tests
    fn is_test(&self) -> bool {
        self.current() == AppEnv::Test
    }

    /// Running in local development
    fn is_development(&self) -> bool {
        self.current() == AppEnv::Development
    }
}

impl RuntimeEnvironment for AppEnv {
    fn current(&self) -> AppEnv {
        *self
    }
}

/// Reads the environment from a process environment variable.
///
/// Unset means development; an unrecognised value means production.
#[derive(Debug, Clone)]
pub struct ProcessEnvironment {
    var: String,
}

impl ProcessEnvironment {
    /// Read from a custom variable name
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable being read
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self::with_var(DEFAULT_ENV_VAR)
    }
}

impl RuntimeEnvironment for ProcessEnvironment {
    fn current(&self) -> AppEnv {
        match std::env::var(&self.var) {
            Ok(value) => value.parse().unwrap_or(AppEnv::Production),
            Err(_) => AppEnv::Development,
        }
    }
}
