//! Internationalization (i18n) module for multi-language page rendering.
//!
//! This module contains the language-state core: the supported-language
//! registry, the validated `Language` type, the per-language translation
//! table, and the state manager that resolves, loads, and switches
//! languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language validated against the registry
//! - `table`: Dot-path translation table loaded from a JSON resource
//! - `manager`: Language resolution, loading with fallback, and switching
//!
//! # Example
//!
//! ```rust,ignore
//! use page_i18n::i18n::{Language, resolve_initial_language};
//!
//! let lang = resolve_initial_language(Some("fr"), None, None, Language::DEFAULT);
//! assert_eq!(lang.code(), "fr");
//! ```

mod language;
mod manager;
mod registry;
mod table;

pub use language::Language;
pub use manager::{resolve_initial_language, LanguageState, LANG_PARAM};
pub use registry::{LanguageConfig, LanguageRegistry, FALLBACK_LOCALE_TAG};
pub use table::{PageMeta, TranslationTable};

/// Errors reported by language operations.
///
/// Unsupported codes are the only synchronously rejected condition; load
/// failures degrade via the fallback hop and are reported as flags, and
/// missing translation keys are ordinary `None` lookups.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The requested code is not in the supported set; no state changed.
    #[error("unsupported language code '{0}'")]
    UnsupportedLanguage(String),
}
