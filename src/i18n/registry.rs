//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of every language the page can
//! be rendered in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.
//!
//! A small curated subset of languages carries full metadata (display name,
//! native name, locale tag). Codes outside that subset are still switchable
//! but fall back to generic defaults.

use std::sync::OnceLock;

/// Locale tag used when a supported code has no curated metadata.
pub const FALLBACK_LOCALE_TAG: &str = "en-US";

/// Every language code the page can be switched to, in display order.
const SUPPORTED_CODES: &[&str] = &[
    "en", "es", "zh", "de", "ar", "fr", "hi", "bn", "ur", "pt-BR", "ru", "ja", "ko", "id", "vi",
    "tl", "sw", "yo", "ha", "am", "it", "nl", "tr", "th", "fa", "pa", "ms", "pl", "uk", "el",
];

/// Codes rendered right-to-left. Consulted when setting the page's
/// direction attribute.
const RTL_CODES: &[&str] = &["ar", "ur", "fa"];

/// Curated metadata for a supported language.
///
/// Contains the display name, native name, and full locale tag for the
/// languages that ship with complete translations.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language code (e.g., "en", "es", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español", "简体中文")
    pub native_name: &'static str,

    /// Full locale tag used for number and currency formatting
    /// (e.g., "en-US", "es-ES", "zh-CN")
    pub locale_tag: &'static str,
}

/// Global language registry singleton.
///
/// Holds the supported-code set, the curated metadata subset, and the RTL
/// set. Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    curated: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            curated: curated_languages(),
        })
    }

    /// Check whether a code belongs to the supported set.
    pub fn is_supported(&self, code: &str) -> bool {
        SUPPORTED_CODES.contains(&code)
    }

    /// All supported codes in display order.
    pub fn supported_codes(&self) -> &'static [&'static str] {
        SUPPORTED_CODES
    }

    /// Get curated metadata for a code, if any.
    ///
    /// Returns `None` both for unsupported codes and for supported codes
    /// outside the curated subset.
    pub fn curated(&self, code: &str) -> Option<&LanguageConfig> {
        self.curated.iter().find(|lang| lang.code == code)
    }

    /// Display name for a supported code.
    ///
    /// Falls back to the code itself outside the curated subset.
    pub fn display_name(&self, code: &str) -> &'static str {
        match self.curated(code) {
            Some(lang) => lang.name,
            None => self.static_code(code).unwrap_or("unknown"),
        }
    }

    /// Native name for a supported code, with the same fallback as
    /// [`display_name`](Self::display_name).
    pub fn native_name(&self, code: &str) -> &'static str {
        match self.curated(code) {
            Some(lang) => lang.native_name,
            None => self.static_code(code).unwrap_or("unknown"),
        }
    }

    /// Full locale tag for a supported code.
    ///
    /// Codes outside the curated subset fall back to [`FALLBACK_LOCALE_TAG`],
    /// matching how the page falls back when no tag mapping exists.
    pub fn locale_tag(&self, code: &str) -> &'static str {
        self.curated(code)
            .map(|lang| lang.locale_tag)
            .unwrap_or(FALLBACK_LOCALE_TAG)
    }

    /// Whether a code is rendered right-to-left.
    pub fn is_rtl(&self, code: &str) -> bool {
        RTL_CODES.contains(&code)
    }

    /// Map a borrowed code to its `'static` entry in the supported set.
    pub fn static_code(&self, code: &str) -> Option<&'static str> {
        SUPPORTED_CODES.iter().find(|c| **c == code).copied()
    }
}

/// Curated language metadata.
///
/// These six languages ship with full translations, display names, and
/// locale tags. The remaining supported codes use generic defaults.
fn curated_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale_tag: "en-US",
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            locale_tag: "es-ES",
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "简体中文",
            locale_tag: "zh-CN",
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            locale_tag: "de-DE",
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            locale_tag: "ar-SA",
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            locale_tag: "fr-FR",
        },
    ]
}
