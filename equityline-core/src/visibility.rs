//! Show/hide state of the projection line and label, and the shortcut that flips it.

use serde::{Deserialize, Serialize};

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false };
}

/// A host-neutral key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: char,
    pub modifiers: Modifiers,
}

impl KeyStroke {
    pub fn new(key: char, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: char) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn shift(key: char) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }
}

/// Letter + required modifiers. Extra modifiers are ignored, letter case is not significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub modifiers: Modifiers,
}

impl Shortcut {
    /// Shift+E.
    pub const TOGGLE_VISIBILITY: Shortcut = Shortcut { key: 'E', modifiers: Modifiers::SHIFT };

    pub fn matches(&self, stroke: &KeyStroke) -> bool {
        stroke.key.eq_ignore_ascii_case(&self.key)
            && (!self.modifiers.shift || stroke.modifiers.shift)
            && (!self.modifiers.ctrl || stroke.modifiers.ctrl)
            && (!self.modifiers.alt || stroke.modifiers.alt)
    }
}

/// Whether the line and label are drawn visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    visible: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hidden(&self) -> bool {
        !self.visible
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}
