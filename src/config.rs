use crate::i18n::LanguageRegistry;
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Translation resources
    pub locales_base_url: String,
    pub default_language: String,

    // Persistence
    pub preference_file: String,

    // Page under localization
    pub page_file: String,
    pub page_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // Base URL the per-language JSON resources are fetched from
            locales_base_url: std::env::var("LOCALES_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/locales".to_string()),
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            // Persisted preference (the localStorage stand-in)
            preference_file: std::env::var("PREFERENCE_FILE")
                .unwrap_or_else(|_| "data/language".to_string()),

            // Page document and its address
            page_file: std::env::var("PAGE_FILE").unwrap_or_else(|_| "data/page.json".to_string()),
            page_url: std::env::var("PAGE_URL").unwrap_or_else(|_| "/index.html".to_string()),
        };

        if !LanguageRegistry::get().is_supported(&config.default_language) {
            bail!(
                "DEFAULT_LANGUAGE '{}' is not a supported language code",
                config.default_language
            );
        }

        Ok(config)
    }

    /// URL of the translation resource for a language code.
    pub fn locale_url(&self, code: &str) -> String {
        format!("{}/{}.json", self.locales_base_url.trim_end_matches('/'), code)
    }
}
