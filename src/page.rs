//! Page document model: the live page as an explicit value.
//!
//! The renderer mutates a [`Document`] in place the way the original widget
//! mutates the DOM. Elements carry the same marking conventions: a
//! translation key, an optional raw number to format, or an optional
//! currency amount with its currency code. The page address models the
//! address bar; its `lang` query parameter is read at startup and rewritten
//! on every switch without navigation.

use serde::{Deserialize, Serialize};

/// Text direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value form ("ltr" / "rtl").
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// How an element receives translated text.
///
/// `Input` covers typed-input elements, which take the translation as a
/// placeholder hint; everything else takes it as rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Text,
    Input,
}

/// One translatable or formattable element on the page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Element {
    /// Element identifier, for addressing in tests and diagnostics
    #[serde(default)]
    pub id: String,

    /// How translated text is written into this element
    #[serde(default)]
    pub kind: ElementKind,

    /// Dot-delimited translation key, when the element is marked for
    /// translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_key: Option<String>,

    /// Raw numeric value, when the element is marked for locale-aware
    /// number formatting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,

    /// Raw amount, when the element is marked for currency formatting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_amount: Option<f64>,

    /// Currency code accompanying `currency_amount`; absent means "USD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Rendered content (may contain limited markup such as line breaks)
    #[serde(default)]
    pub content: String,

    /// Placeholder hint, meaningful for `Input` elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// The page as a mutable document value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Document {
    /// Page title
    #[serde(default)]
    pub title: String,

    /// Description metadata, when the page declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Document language attribute
    #[serde(default)]
    pub lang: String,

    /// Document text-direction attribute
    #[serde(default)]
    pub dir: Direction,

    /// Whether the body carries the RTL class
    #[serde(default)]
    pub rtl_class: bool,

    /// All marked elements on the page
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    /// Parse a document from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find an element by identifier.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// The page address: path plus query parameters, in declaration order.
///
/// Rewriting a parameter preserves the position of existing parameters, the
/// way the address bar keeps its shape when history state is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    path: String,
    params: Vec<(String, String)>,
}

impl PageAddress {
    /// Parse an address of the form `/path?key=value&key2=value2`.
    ///
    /// Parameters without a value parse as empty strings. A missing query
    /// string yields no parameters.
    pub fn parse(address: &str) -> Self {
        let (path, query) = match address.split_once('?') {
            Some((path, query)) => (path, query),
            None => (address, ""),
        };

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Self {
            path: path.to_string(),
            params,
        }
    }

    /// Read a query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a query parameter in place, appending it when absent.
    pub fn set_param(&mut self, key: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((key.to_string(), value.to_string())),
        }
    }

    /// The path component.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Display for PageAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, k, v)?;
        }
        Ok(())
    }
}
