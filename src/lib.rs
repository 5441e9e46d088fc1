//! Page localization engine: language resolution, translation loading, and
//! document rendering.
//!
//! The crate models the moving parts of a localized page as explicit
//! values: a [`page::Document`] stands in for the DOM, a
//! [`page::PageAddress`] for the address bar, and a
//! [`storage::PreferenceStore`] for the persisted preference. The
//! [`i18n::LanguageState`] resolves and owns the active language and its
//! translation table, the [`renderer::PageRenderer`] projects that state
//! onto the document, and the [`switcher::Switcher`] drives the
//! language-selection control.

pub mod config;
pub mod format;
pub mod i18n;
pub mod page;
pub mod renderer;
pub mod storage;
pub mod switcher;
