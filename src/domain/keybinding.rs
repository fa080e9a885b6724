//! Keybinding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// A user action the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Quit,
    /// Generate a new random quote from the current filter.
    Generate,
    /// Copy the displayed quote to the clipboard.
    CopyQuote,
    /// Select the "all" pseudo-category.
    SelectAll,
    /// Move the category selection one tab right.
    NextCategory,
    /// Move the category selection one tab left.
    PrevCategory,
}

/// A key bound to an action, with a footer label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// The bound key.
    pub key: KeyEvent,
    /// The action triggered by the key.
    pub action: Action,
    /// Label shown in the footer bar.
    pub label: Cow<'static, str>,
    /// Whether the binding appears in the footer bar.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a footer-visible binding.
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    /// Hides the binding from the footer bar.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Returns whether an incoming key event triggers this binding.
    ///
    /// Compared on code and modifiers only; event kind and state vary by
    /// terminal and are ignored.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

/// The built-in binding table.
#[must_use]
pub fn default_bindings() -> Vec<Keybind> {
    let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

    vec![
        Keybind::new(plain(KeyCode::Char('g')), Action::Generate, "Generate"),
        Keybind::new(plain(KeyCode::Enter), Action::Generate, "Generate").hidden(),
        Keybind::new(plain(KeyCode::Char('c')), Action::CopyQuote, "Copy"),
        Keybind::new(plain(KeyCode::Char('a')), Action::SelectAll, "All"),
        Keybind::new(plain(KeyCode::Right), Action::NextCategory, "Next"),
        Keybind::new(plain(KeyCode::Left), Action::PrevCategory, "Prev"),
        Keybind::new(plain(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
            "Quit",
        )
        .hidden(),
    ]
}
