//! Translation provider abstraction

use crate::core::errors::Result;

/// A translation backend.
///
/// `Ok(Some(text))` is a translation, `Ok(None)` means the backend had
/// nothing to return, and `Err` means it failed. Transport concerns such as
/// retries and timeouts belong to the implementation.
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from locale `from` into locale `to`
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<Option<String>>;
}

impl<F> TranslationProvider for F
where
    F: Fn(&str, &str, &str) -> Result<Option<String>> + Send + Sync,
{
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<Option<String>> {
        self(text, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::TranslationError;

    struct Echo;

    impl TranslationProvider for Echo {
        fn translate(&self, text: &str, from: &str, to: &str) -> Result<Option<String>> {
            Ok(Some(format!("{}:{}:{}", from, to, text)))
        }
    }

    #[test]
    fn test_struct_provider() {
        let provider: &dyn TranslationProvider = &Echo;
        assert_eq!(
            provider.translate("hi", "en", "fr").unwrap(),
            Some("en:fr:hi".to_string())
        );
    }

    #[test]
    fn test_closure_provider() {
        let provider = |_: &str, _: &str, to: &str| -> Result<Option<String>> {
            if to == "de" {
                Err(TranslationError::provider("unsupported"))
            } else {
                Ok(None)
            }
        };

        assert!(TranslationProvider::translate(&provider, "x", "en", "de").is_err());
        assert_eq!(TranslationProvider::translate(&provider, "x", "en", "fr").unwrap(), None);
    }
}
