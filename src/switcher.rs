//! Language switcher: the dropdown control's state machine.
//!
//! Two states, closed and open. The control is synthesized from the
//! supported-language set: one option per language labeled with its display
//! name, the active language's option marked, and the toggle label showing
//! the uppercased current code. Selection updates the local display and
//! hands the chosen code back to the caller; completing the actual switch
//! is the language state's job, and the display update stands even if the
//! caller never completes it.

use crate::i18n::Language;
use tracing::debug;

/// One entry in the dropdown's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherOption {
    /// Language code this option selects
    pub code: &'static str,

    /// Display label (curated display name, or the code itself)
    pub label: &'static str,

    /// Whether this option is marked as the active one
    pub active: bool,
}

/// The dropdown control.
#[derive(Debug, Clone)]
pub struct Switcher {
    open: bool,
    label: String,
    options: Vec<SwitcherOption>,
}

impl Switcher {
    /// Synthesize the control for the current language: closed, label set
    /// to the uppercased code, one option per supported language with the
    /// current one pre-selected.
    pub fn new(current: Language) -> Self {
        let options = Language::supported()
            .into_iter()
            .map(|lang| SwitcherOption {
                code: lang.code(),
                label: lang.display_name(),
                active: lang == current,
            })
            .collect();

        Self {
            open: false,
            label: current.code().to_uppercase(),
            options,
        }
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle's displayed label (uppercased language code).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The option list, in supported-language order.
    pub fn options(&self) -> &[SwitcherOption] {
        &self.options
    }

    /// The code of the option currently marked active, if any.
    pub fn active_code(&self) -> Option<&'static str> {
        self.options.iter().find(|opt| opt.active).map(|opt| opt.code)
    }

    /// A click on the toggle control: flips between closed and open.
    ///
    /// The click is consumed here and never reaches the outside-click
    /// handling.
    pub fn toggle_click(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "switcher toggled");
    }

    /// A click outside both the toggle and the option list: closes the
    /// dropdown. No-op when already closed.
    pub fn outside_click(&mut self) {
        self.open = false;
    }

    /// Select an option by code.
    ///
    /// Updates the displayed label, moves the active marking to the chosen
    /// option, closes the dropdown, and returns the code for the caller to
    /// pass to the language state's switch operation. Returns `None` (and
    /// changes nothing) for a code that has no option — the control only
    /// ever offers supported codes, so this happens only on programmatic
    /// misuse.
    pub fn select(&mut self, code: &str) -> Option<&'static str> {
        let selected = self.options.iter().find(|opt| opt.code == code)?.code;

        self.label = selected.to_uppercase();
        for option in &mut self.options {
            option.active = option.code == selected;
        }
        self.open = false;

        debug!(code = selected, "switcher option selected");
        Some(selected)
    }
}
