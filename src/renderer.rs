//! Page renderer: projects the held translation table onto the document.
//!
//! All effects are document mutations; nothing is returned beyond
//! completion. Missing keys are tolerated — by default the element keeps
//! its existing content, though the policy can be switched to render a
//! visible marker instead for debugging untranslated pages.

use crate::format;
use crate::i18n::{Language, TranslationTable};
use crate::page::{Direction, Document, ElementKind};
use tracing::debug;

/// Default currency when a currency-marked element names none.
const DEFAULT_CURRENCY: &str = "USD";

/// What to do when an element's translation key has no value in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyPolicy {
    /// Leave the element's existing content untouched (the page's
    /// historical behavior).
    #[default]
    KeepExisting,

    /// Replace the content with a visible `MISSING: <key>` marker.
    MarkMissing,
}

/// Renders language state onto a page document.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    missing_key: MissingKeyPolicy,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a non-default missing-key policy.
    pub fn with_missing_key_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }

    /// Apply the full rendering pass: translations, dynamic content, and
    /// document attributes, in that order.
    pub fn apply(&self, doc: &mut Document, table: &TranslationTable, language: Language) {
        self.apply_translations(doc, table);
        self.update_dynamic_content(doc, language);
        self.update_html_attributes(doc, language);
        debug!(lang = language.code(), "page rendered");
    }

    /// Write translated text into every element marked with a key.
    ///
    /// Input elements receive the value as a placeholder hint; all others
    /// receive it as rendered content. A key that resolves to nothing
    /// follows the configured missing-key policy. The reserved `meta`
    /// section updates the page title and description when present.
    pub fn apply_translations(&self, doc: &mut Document, table: &TranslationTable) {
        if let Some(meta) = table.meta() {
            if let Some(title) = meta.title {
                doc.title = title;
            }
            if let Some(description) = meta.description {
                if doc.meta_description.is_some() {
                    doc.meta_description = Some(description);
                }
            }
        }

        for element in &mut doc.elements {
            let Some(key) = element.i18n_key.as_deref() else {
                continue;
            };

            match table.get(key) {
                Some(text) => match element.kind {
                    ElementKind::Input => element.placeholder = Some(text.to_string()),
                    ElementKind::Text => element.content = text.to_string(),
                },
                None => match self.missing_key {
                    MissingKeyPolicy::KeepExisting => {}
                    MissingKeyPolicy::MarkMissing => {
                        element.content = format!("MISSING: {}", key);
                    }
                },
            }
        }
    }

    /// Re-render numeric and currency elements with the conventions of the
    /// active language's locale tag.
    pub fn update_dynamic_content(&self, doc: &mut Document, language: Language) {
        let locale_tag = language.locale_tag();

        for element in &mut doc.elements {
            if let Some(number) = element.number {
                element.content = format::format_number(number, locale_tag);
            }

            if let Some(amount) = element.currency_amount {
                let currency = element.currency_code.as_deref().unwrap_or(DEFAULT_CURRENCY);
                element.content = format::format_currency(amount, currency, locale_tag);
            }
        }
    }

    /// Set the document's language attribute, text direction, and RTL body
    /// class from the active language.
    pub fn update_html_attributes(&self, doc: &mut Document, language: Language) {
        doc.lang = language.code().to_string();

        if language.is_rtl() {
            doc.dir = Direction::Rtl;
            doc.rtl_class = true;
        } else {
            doc.dir = Direction::Ltr;
            doc.rtl_class = false;
        }
    }
}
