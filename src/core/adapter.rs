//! Translation adapter: gatekeeping and post-processing around a provider

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::config::AdapterConfig;
use crate::core::environment::RuntimeEnvironment;
use crate::core::models::{Refusal, TranslationOutcome, TranslationRequest};
use crate::core::provider::TranslationProvider;

/// Matches a complete `<...>` tag
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Whether `text` contains an HTML tag. A lone `<` or `>` does not count.
pub fn contains_html_tag(text: &str) -> bool {
    HTML_TAG.is_match(text)
}

/// Clean up provider output for the target locale
pub fn sanitize(raw: &str, to: &str) -> String {
    let text = raw.replace("&#39;", "'");

    // Provider sometimes splits Spanish interpolation tokens
    if to == "es" {
        text.replace("% {", "%{")
    } else {
        text
    }
}

/// Forwards text to a [`TranslationProvider`] when it is safe and useful to
/// do so, and cleans up what comes back.
///
/// Cloning is cheap; all collaborators are shared.
#[derive(Clone)]
pub struct TranslationAdapter {
    config: Arc<AdapterConfig>,
    provider: Arc<dyn TranslationProvider>,
    environment: Arc<dyn RuntimeEnvironment>,
}

impl std::fmt::Debug for TranslationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationAdapter")
            .field("supported_locales", &self.config.supported_locales.len())
            .field("api_key", &self.config.api_key().map(|_| "<redacted>"))
            .field("environment", &self.environment.current())
            .finish()
    }
}

impl TranslationAdapter {
    /// Create a new adapter
    pub fn new<P, E>(config: AdapterConfig, provider: P, environment: E) -> Self
    where
        P: TranslationProvider + 'static,
        E: RuntimeEnvironment + 'static,
    {
        Self::from_shared(Arc::new(config), Arc::new(provider), Arc::new(environment))
    }

    /// Create an adapter from already shared collaborators
    pub fn from_shared(
        config: Arc<AdapterConfig>,
        provider: Arc<dyn TranslationProvider>,
        environment: Arc<dyn RuntimeEnvironment>,
    ) -> Self {
        Self {
            config,
            provider,
            environment,
        }
    }

    /// Adapter configuration
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Check whether a translation would be refused before reaching the
    /// provider. Rules are applied in order and the first match wins.
    pub fn preflight(&self, text: &str, from: &str, to: &str) -> Option<Refusal> {
        let locales = &self.config.supported_locales;
        if !locales.contains(from) || !locales.contains(to) {
            return Some(Refusal::UnsupportedLocale);
        }

        if self.environment.is_test() {
            return Some(Refusal::TestEnvironment);
        }

        if self.config.api_key().is_none() && self.environment.is_development() {
            return Some(Refusal::MissingApiKey);
        }

        if contains_html_tag(text) {
            return Some(Refusal::ContainsHtml);
        }

        None
    }

    /// Translate `text` from `from` into `to`
    pub fn translate(&self, text: &str, from: &str, to: &str) -> TranslationOutcome {
        if let Some(reason) = self.preflight(text, from, to) {
            debug!("Refusing translation {} -> {}: {}", from, to, reason);
            return TranslationOutcome::Refused(reason);
        }

        debug!("Translating {} chars {} -> {}", text.len(), from, to);

        match self.provider.translate(text, from, to) {
            Ok(Some(raw)) => TranslationOutcome::Translated(sanitize(&raw, to)),
            Ok(None) => {
                debug!("Provider returned no translation for {} -> {}", from, to);
                TranslationOutcome::Unavailable
            }
            Err(e) => {
                warn!("Provider failed for {} -> {}: {}", from, to, e);
                TranslationOutcome::Refused(Refusal::ProviderFailed)
            }
        }
    }

    /// Translate a prepared request
    pub fn translate_request(&self, request: &TranslationRequest) -> TranslationOutcome {
        self.translate(&request.text, &request.from_locale, &request.to_locale)
    }
}
