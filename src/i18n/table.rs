//! Translation table: nested dot-path lookup over a loaded JSON resource.
//!
//! A table is loaded fresh per language and replaced wholesale on switch;
//! it is never mutated in place. Lookups return an explicit `Option` so the
//! renderer's keep-existing-content path can be asserted on directly.

use serde::Deserialize;
use serde_json::Value;

/// Reserved top-level section consumed by the renderer for page metadata.
const META_SECTION: &str = "meta";

/// Page-level metadata carried in a translation resource's `meta` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageMeta {
    /// Localized page title
    pub title: Option<String>,

    /// Localized page description
    pub description: Option<String>,
}

/// A loaded translation table for one language.
///
/// Wraps the parsed JSON tree; values are reachable through dot-delimited
/// paths ("nav.home"). Only string leaves count as translations — a path
/// that stops at an object or a non-string leaf resolves to `None`.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    root: Value,
}

impl TranslationTable {
    /// An empty table. Every lookup misses.
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }

    /// Parse a table from a JSON string.
    ///
    /// The resource must be a JSON object at the top level.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(json)?;
        Ok(Self { root })
    }

    /// Build a table from an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Look up a translation by dot-delimited key path.
    ///
    /// Returns `Some` only when every path segment resolves and the final
    /// segment is a string leaf. A miss is an explicit `None`, never an
    /// error.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    /// Whether the table contains no translations at all.
    pub fn is_empty(&self) -> bool {
        match self.root.as_object() {
            Some(map) => map.is_empty(),
            None => true,
        }
    }

    /// The reserved `meta` section, if present and well-formed.
    pub fn meta(&self) -> Option<PageMeta> {
        let section = self.root.as_object()?.get(META_SECTION)?;
        serde_json::from_value(section.clone()).ok()
    }
}
