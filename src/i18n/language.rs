//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a code that has been validated
//! against the registry. Holding a `Language` is proof that the code belongs
//! to the supported set, so downstream code never re-checks.

use crate::i18n::{I18nError, LanguageRegistry};

/// A validated language.
///
/// Constructible only through [`Language::from_code`] or the [`Language::DEFAULT`]
/// constant, so every instance carries a code from the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// The default language, used as the final resolution fallback and as
    /// the target of the single translation-load fallback hop.
    pub const DEFAULT: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the supported set
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        match LanguageRegistry::get().static_code(code) {
            Some(code) => Ok(Language { code }),
            None => Err(I18nError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Get the language code (e.g., "en", "es").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// English display name, falling back to the code outside the curated
    /// subset.
    pub fn display_name(&self) -> &'static str {
        LanguageRegistry::get().display_name(self.code)
    }

    /// Native name (e.g., "Español"), with the same fallback as
    /// [`display_name`](Self::display_name).
    pub fn native_name(&self) -> &'static str {
        LanguageRegistry::get().native_name(self.code)
    }

    /// Full locale tag (e.g., "es-ES") used for number and currency
    /// formatting.
    pub fn locale_tag(&self) -> &'static str {
        LanguageRegistry::get().locale_tag(self.code)
    }

    /// Whether this language is rendered right-to-left.
    pub fn is_rtl(&self) -> bool {
        LanguageRegistry::get().is_rtl(self.code)
    }

    /// Whether this is the default language.
    pub fn is_default(&self) -> bool {
        *self == Language::DEFAULT
    }

    /// All supported languages in display order.
    pub fn supported() -> Vec<Language> {
        LanguageRegistry::get()
            .supported_codes()
            .iter()
            .map(|code| Language { code })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::DEFAULT.code(), "en");
        assert!(Language::DEFAULT.is_default());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_curated() {
        let spanish = Language::from_code("es").expect("Should succeed");
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.display_name(), "Spanish");
        assert_eq!(spanish.native_name(), "Español");
    }

    #[test]
    fn test_from_code_non_curated() {
        let hindi = Language::from_code("hi").expect("Should succeed");
        assert_eq!(hindi.code(), "hi");
        assert_eq!(hindi.display_name(), "hi");
    }

    #[test]
    fn test_from_code_region_variant() {
        let brazilian = Language::from_code("pt-BR").expect("Should succeed");
        assert_eq!(brazilian.code(), "pt-BR");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unsupported language"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_locale_tag_curated() {
        assert_eq!(Language::from_code("de").unwrap().locale_tag(), "de-DE");
    }

    #[test]
    fn test_locale_tag_fallback() {
        assert_eq!(Language::from_code("sw").unwrap().locale_tag(), "en-US");
    }

    #[test]
    fn test_is_rtl() {
        assert!(Language::from_code("ar").unwrap().is_rtl());
        assert!(Language::from_code("ur").unwrap().is_rtl());
        assert!(!Language::from_code("en").unwrap().is_rtl());
    }

    #[test]
    fn test_is_default() {
        assert!(Language::from_code("en").unwrap().is_default());
        assert!(!Language::from_code("es").unwrap().is_default());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::DEFAULT;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
        assert_ne!(lang1, Language::from_code("es").unwrap());
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::DEFAULT;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_debug() {
        let lang = Language::from_code("es").unwrap();
        let debug = format!("{:?}", lang);
        assert!(debug.contains("es"));
    }

    // ==================== Enumeration Tests ====================

    #[test]
    fn test_supported_count_and_order() {
        let all = Language::supported();
        assert_eq!(all.len(), 30);
        assert_eq!(all[0].code(), "en");
        assert_eq!(all[1].code(), "es");
        assert_eq!(all.last().unwrap().code(), "el");
    }
}
