//! Fill in missing locale values for translation keys

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::AddAssign;
use tracing::{debug, info};

use crate::core::adapter::TranslationAdapter;
use crate::core::models::TranslationOutcome;

/// A translation key with its value per locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationKey {
    /// Key name, e.g. `users.greeting`
    pub key: String,
    /// Value per locale code
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl TranslationKey {
    /// Create an empty key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set a value for a locale
    pub fn with_value(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(locale.into(), value.into());
        self
    }

    /// Non-blank value for a locale
    pub fn value(&self, locale: &str) -> Option<&str> {
        self.values
            .get(locale)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Counts from a fill run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    /// Values written
    pub filled: usize,
    /// Locales the adapter refused
    pub refused: usize,
    /// Locales the provider had nothing for
    pub unavailable: usize,
    /// Locales skipped because the key has no default value
    pub skipped: usize,
}

impl AddAssign for FillReport {
    fn add_assign(&mut self, other: Self) {
        self.filled += other.filled;
        self.refused += other.refused;
        self.unavailable += other.unavailable;
        self.skipped += other.skipped;
    }
}

/// Translates blank locale values from the default locale
#[derive(Debug, Clone)]
pub struct MissingTranslationFiller {
    adapter: TranslationAdapter,
    default_locale: String,
}

impl MissingTranslationFiller {
    /// Create a new filler
    pub fn new(adapter: TranslationAdapter, default_locale: impl Into<String>) -> Self {
        Self {
            adapter,
            default_locale: default_locale.into(),
        }
    }

    /// Default locale values are translated from
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Fill blank values of `key` for each of `locales`.
    ///
    /// Existing non-blank values are left alone and each locale is
    /// translated at most once.
    pub fn fill(&self, key: &mut TranslationKey, locales: &[String]) -> FillReport {
        let mut report = FillReport::default();

        let targets: BTreeSet<&str> = locales
            .iter()
            .map(String::as_str)
            .filter(|locale| *locale != self.default_locale && key.value(locale).is_none())
            .collect();

        let source = match key.value(&self.default_locale) {
            Some(source) => source.to_string(),
            None => {
                debug!("Key {} has no {} value, skipping", key.key, self.default_locale);
                report.skipped = targets.len();
                return report;
            }
        };

        for locale in targets {
            match self.adapter.translate(&source, &self.default_locale, locale) {
                TranslationOutcome::Translated(text) if !text.trim().is_empty() => {
                    key.values.insert(locale.to_string(), text);
                    report.filled += 1;
                }
                TranslationOutcome::Translated(_) | TranslationOutcome::Unavailable => {
                    report.unavailable += 1;
                }
                TranslationOutcome::Refused(reason) => {
                    debug!("Key {} not translated to {}: {}", key.key, locale, reason);
                    report.refused += 1;
                }
            }
        }

        report
    }

    /// Fill every key in `keys`
    pub fn fill_all(&self, keys: &mut [TranslationKey], locales: &[String]) -> FillReport {
        let mut report = FillReport::default();
        for key in keys.iter_mut() {
            report += self.fill(key, locales);
        }

        info!(
            "Filled {} values across {} keys ({} refused, {} unavailable, {} skipped)",
            report.filled,
            keys.len(),
            report.refused,
            report.unavailable,
            report.skipped
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AdapterConfig;
    use crate::core::environment::AppEnv;
    use crate::core::errors::Result;
    use crate::core::locales::SupportedLocales;

    fn locales(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn filler(env: AppEnv) -> MissingTranslationFiller {
        let provider = |text: &str, _: &str, to: &str| -> Result<Option<String>> {
            match to {
                "fr" => Ok(Some(format!("fr:{}", text))),
                "es" => Ok(Some(format!("es:&#39;{}&#39; % {{n}}", text))),
                "de" => Ok(None),
                _ => Ok(Some("   ".to_string())),
            }
        };
        let config = AdapterConfig::new(Some("key".to_string()))
            .with_locales(SupportedLocales::from_codes(["en", "es", "fr", "de", "it"]));
        MissingTranslationFiller::new(TranslationAdapter::new(config, provider, env), "en")
    }

    #[test]
    fn test_fills_blank_values() {
        let filler = filler(AppEnv::Production);
        let mut key = TranslationKey::new("greeting")
            .with_value("en", "hello")
            .with_value("fr", "");

        let report = filler.fill(&mut key, &locales(&["en", "es", "fr"]));

        assert_eq!(report.filled, 2);
        assert_eq!(key.value("fr"), Some("fr:hello"));
        assert_eq!(key.value("es"), Some("es:'hello' %{n}"));
        assert_eq!(key.value("en"), Some("hello"));
    }

    #[test]
    fn test_keeps_existing_values() {
        let filler = filler(AppEnv::Production);
        let mut key = TranslationKey::new("greeting")
            .with_value("en", "hello")
            .with_value("fr", "salut");

        let report = filler.fill(&mut key, &locales(&["fr"]));

        assert_eq!(report, FillReport::default());
        assert_eq!(key.value("fr"), Some("salut"));
    }

    #[test]
    fn test_skips_key_without_default() {
        let filler = filler(AppEnv::Production);
        let mut key = TranslationKey::new("greeting").with_value("en", "  ");

        let report = filler.fill(&mut key, &locales(&["en", "es", "fr"]));

        assert_eq!(report.skipped, 2);
        assert_eq!(report.filled, 0);
        assert_eq!(key.value("es"), None);
    }

    #[test]
    fn test_counts_unavailable_and_refused() {
        let filler = filler(AppEnv::Production);
        let mut key = TranslationKey::new("greeting").with_value("en", "hello");

        let report = filler.fill(&mut key, &locales(&["de", "it", "xx"]));

        assert_eq!(report.unavailable, 2);
        assert_eq!(report.refused, 1);
        assert!(key.value("de").is_none());
        assert!(key.value("it").is_none());
    }

    #[test]
    fn test_refused_under_test_environment() {
        let filler = filler(AppEnv::Test);
        let mut key = TranslationKey::new("greeting").with_value("en", "hello");

        let report = filler.fill(&mut key, &locales(&["es", "fr"]));

        assert_eq!(report.refused, 2);
        assert_eq!(key.values.len(), 1);
    }

    #[test]
    fn test_repeated_locale_translated_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let provider = move |text: &str, _: &str, _: &str| -> Result<Option<String>> {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Ok(Some(format!("{}#{}", text, n)))
        };
        let config = AdapterConfig::new(Some("key".to_string()))
            .with_locales(SupportedLocales::from_codes(["en", "fr"]));
        let filler = MissingTranslationFiller::new(
            TranslationAdapter::new(config, provider, AppEnv::Production),
            "en",
        );
        let mut key = TranslationKey::new("greeting").with_value("en", "hi");

        let report = filler.fill(&mut key, &locales(&["fr", "fr"]));

        assert_eq!(report.filled, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(key.value("fr"), Some("hi#0"));
    }

    #[test]
    fn test_fill_all_sums_reports() {
        let filler = filler(AppEnv::Production);
        let mut keys = vec![
            TranslationKey::new("a").with_value("en", "one"),
            TranslationKey::new("b"),
            TranslationKey::new("c").with_value("en", "<b>three</b>"),
        ];

        let report = filler.fill_all(&mut keys, &locales(&["en", "fr"]));

        assert_eq!(
            report,
            FillReport {
                filled: 1,
                refused: 1,
                unavailable: 0,
                skipped: 1,
            }
        );
        assert_eq!(keys[0].value("fr"), Some("fr:one"));
        assert_eq!(filler.default_locale(), "en");
    }
}
