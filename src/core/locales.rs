//! Supported locale set

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Locale codes accepted by Google Translate
pub const DEFAULT_LOCALES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "ceb", "co", "cs", "cy", "da", "de",
    "el", "en", "eo", "es", "et", "eu", "fa", "fi", "fr", "fy", "ga", "gd", "gl", "gu", "ha",
    "haw", "he", "hi", "hmn", "hr", "ht", "hu", "hy", "id", "ig", "is", "it", "iw", "ja", "jw",
    "ka", "kk", "km", "kn", "ko", "ku", "ky", "la", "lb", "lo", "lt", "lv", "mg", "mi", "mk",
    "ml", "mn", "mr", "ms", "mt", "my", "ne", "nl", "no", "ny", "or", "pa", "pl", "ps", "pt",
    "ro", "ru", "rw", "sd", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "st", "su", "sv",
    "sw", "ta", "te", "tg", "th", "tk", "tl", "tr", "tt", "ug", "uk", "ur", "uz", "vi", "xh",
    "yi", "yo", "zh", "zh-CN", "zh-TW", "zu",
];

/// Set of locale codes the adapter will translate between.
///
/// Membership is an exact string comparison: `"EN"` and `"en_US"` are not
/// members just because `"en"` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedLocales {
    codes: BTreeSet<String>,
}

impl SupportedLocales {
    /// Build a set from locale codes
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Check membership
    pub fn contains(&self, locale: &str) -> bool {
        self.codes.contains(locale)
    }

    /// Iterate over codes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Number of codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for SupportedLocales {
    fn default() -> Self {
        Self::from_codes(DEFAULT_LOCALES.iter().copied())
    }
}
