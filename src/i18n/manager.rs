//! Language state: resolution, translation loading, and switching.
//!
//! One `LanguageState` value exists per page lifetime. It owns the current
//! language, the held translation table, the persisted preference store,
//! and the page address, and it is passed explicitly to whatever needs it —
//! there is no page-wide global instance.
//!
//! Loads are tagged with a monotonically increasing sequence number; a
//! completed load is applied only when no newer load has been applied
//! already, so a slow early fetch can never clobber a fast later one.

use crate::config::Config;
use crate::i18n::{I18nError, Language, TranslationTable};
use crate::page::PageAddress;
use crate::storage::PreferenceStore;
use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

/// Query parameter carrying the language on the page address.
pub const LANG_PARAM: &str = "lang";

/// Resolve the startup language from layered sources.
///
/// Strict priority: address parameter, then persisted preference, then the
/// browser's reported language (region suffix ignored, so "es-MX" counts
/// as "es"), then the default. Each candidate must validate against the
/// supported set; the first valid one wins. Never fails.
pub fn resolve_initial_language(
    url_lang: Option<&str>,
    stored: Option<&str>,
    browser: Option<&str>,
    default: Language,
) -> Language {
    if let Some(lang) = url_lang.and_then(|code| Language::from_code(code).ok()) {
        return lang;
    }

    if let Some(lang) = stored.and_then(|code| Language::from_code(code).ok()) {
        return lang;
    }

    if let Some(reported) = browser {
        let base = reported.split('-').next().unwrap_or(reported);
        if let Ok(lang) = Language::from_code(base) {
            return lang;
        }
    }

    default
}

/// The page's language state.
pub struct LanguageState {
    current: Language,
    default: Language,
    table: TranslationTable,
    store: PreferenceStore,
    address: PageAddress,
    next_seq: u64,
    applied_seq: u64,
}

impl LanguageState {
    /// Build the state at page load: resolves the initial language from the
    /// address, the store, and the reported browser language.
    ///
    /// The held table starts empty; call
    /// [`load_translations`](Self::load_translations) to populate it.
    pub fn initialize(
        config: &Config,
        store: PreferenceStore,
        address: PageAddress,
        browser_language: Option<&str>,
    ) -> Self {
        // Config validation guarantees the default code is supported
        let default =
            Language::from_code(&config.default_language).unwrap_or(Language::DEFAULT);

        let stored = store.load();
        let current = resolve_initial_language(
            address.param(LANG_PARAM),
            stored.as_deref(),
            browser_language,
            default,
        );

        info!(lang = current.code(), "initial language resolved");

        Self {
            current,
            default,
            table: TranslationTable::empty(),
            store,
            address,
            next_seq: 1,
            applied_seq: 0,
        }
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        self.current
    }

    /// The held translation table.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// The page address, including any rewritten `lang` parameter.
    pub fn address(&self) -> &PageAddress {
        &self.address
    }

    /// Convenience lookup into the held table.
    pub fn get_translation(&self, key: &str) -> Option<&str> {
        self.table.get(key)
    }

    /// Fetch and hold the translation table for a language.
    ///
    /// On success the held table is replaced and `true` is returned. On
    /// failure the condition is logged and, unless the requested language
    /// is already the default, the default's resource is fetched exactly
    /// once as a fallback; if that also fails, `false` is returned and the
    /// prior table stays in place. One fallback hop total, no backoff.
    pub async fn load_translations(
        &mut self,
        client: &reqwest::Client,
        config: &Config,
        language: Language,
    ) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;

        match fetch_table(client, config, language).await {
            Ok(table) => self.apply_load(seq, language, table),
            Err(error) => {
                warn!(
                    lang = language.code(),
                    %error,
                    "failed to load translations"
                );

                if language == self.default {
                    return false;
                }

                match fetch_table(client, config, self.default).await {
                    Ok(table) => self.apply_load(seq, self.default, table),
                    Err(error) => {
                        warn!(
                            lang = self.default.code(),
                            %error,
                            "fallback translations failed to load as well"
                        );
                        false
                    }
                }
            }
        }
    }

    /// Switch the page to another language.
    ///
    /// An unsupported code is rejected with an error and nothing changes.
    /// Otherwise the code becomes current, is persisted, the address
    /// parameter is rewritten without navigation, and the translations are
    /// loaded; the returned flag carries the load outcome.
    pub async fn switch_language(
        &mut self,
        client: &reqwest::Client,
        config: &Config,
        code: &str,
    ) -> Result<bool, I18nError> {
        let language = Language::from_code(code)?;

        self.current = language;

        // Persistence failure degrades the next session, not this one
        if let Err(error) = self.store.save(language.code()) {
            warn!(%error, "failed to persist language preference");
        }

        self.address.set_param(LANG_PARAM, language.code());

        let loaded = self.load_translations(client, config, language).await;
        info!(lang = language.code(), loaded, "language switched");
        Ok(loaded)
    }

    /// Apply a completed load unless a newer one has been applied already.
    fn apply_load(&mut self, seq: u64, language: Language, table: TranslationTable) -> bool {
        if seq <= self.applied_seq {
            debug!(
                seq,
                applied = self.applied_seq,
                lang = language.code(),
                "discarding stale translation load"
            );
            return false;
        }

        self.applied_seq = seq;
        self.table = table;
        debug!(seq, lang = language.code(), "translation table applied");
        true
    }
}

/// Fetch and parse one language's translation resource.
async fn fetch_table(
    client: &reqwest::Client,
    config: &Config,
    language: Language,
) -> Result<TranslationTable> {
    let url = config.locale_url(language.code());

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to request translation resource {}", url))?;

    if !response.status().is_success() {
        bail!(
            "Translation resource {} returned {}",
            url,
            response.status()
        );
    }

    let root: serde_json::Value = response
        .json()
        .await
        .with_context(|| format!("Failed to parse translation resource {}", url))?;

    Ok(TranslationTable::from_value(root))
}
