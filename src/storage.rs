//! Persisted language preference: a single value surviving across sessions.
//!
//! The store is a plain file holding one language code. Reads are tolerant
//! (a missing or unreadable file is simply no preference); writes are
//! synchronous and create the parent directory on first use.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// File-backed single-value preference store.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Open a store at the given path. The file need not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted language code, if any.
    ///
    /// A missing file, unreadable content, or an empty value all read as
    /// "no preference".
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let code = raw.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    /// Persist a language code, replacing any previous value.
    pub fn save(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preference directory {}", parent.display())
                })?;
            }
        }

        std::fs::write(&self.path, code)
            .with_context(|| format!("Failed to write preference file {}", self.path.display()))?;

        debug!(code, path = %self.path.display(), "language preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().expect("tempdir");
        let store = PreferenceStore::open(dir.path().join("language"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let store = PreferenceStore::open(dir.path().join("language"));

        store.save("es").expect("save should succeed");
        assert_eq!(store.load(), Some("es".to_string()));
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let dir = TempDir::new().expect("tempdir");
        let store = PreferenceStore::open(dir.path().join("language"));

        store.save("es").expect("first save");
        store.save("de").expect("second save");
        assert_eq!(store.load(), Some("de".to_string()));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let store = PreferenceStore::open(dir.path().join("nested/deeper/language"));

        store.save("fr").expect("save should create parents");
        assert_eq!(store.load(), Some("fr".to_string()));
    }

    #[test]
    fn test_load_trims_whitespace() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("language");
        std::fs::write(&path, "zh\n").expect("write fixture");

        let store = PreferenceStore::open(path);
        assert_eq!(store.load(), Some("zh".to_string()));
    }

    #[test]
    fn test_load_empty_file_is_none() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("language");
        std::fs::write(&path, "  \n").expect("write fixture");

        let store = PreferenceStore::open(path);
        assert_eq!(store.load(), None);
    }
}
