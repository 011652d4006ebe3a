//! Static key table shared by the board and the task form.

pub mod defaults;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use defaults::default_keymap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Up,
    Down,
    Left,
    Right,
    MoveTaskNext,
    AddTask,
    DeleteTask,
    Help,
    Quit,
}

/// One physical key that fires a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTrigger {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyTrigger {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Shift is ignored for printable characters, since terminals disagree
    /// on whether `?` or `G` arrive with it set.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        modifiers == self.modifiers
    }
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub action: KeyAction,
    pub triggers: Vec<KeyTrigger>,
    pub key: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(
        action: KeyAction,
        triggers: Vec<KeyTrigger>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            action,
            triggers,
            key: key.into(),
            description: description.into(),
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.triggers.iter().any(|trigger| trigger.matches(key))
    }
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<Keybinding>,
}

impl KeyMap {
    pub fn new(bindings: Vec<Keybinding>) -> Self {
        Self { bindings }
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action)
    }

    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        self.action_for(key) == Some(KeyAction::Quit)
    }

    pub fn binding(&self, action: KeyAction) -> Option<&Keybinding> {
        self.bindings.iter().find(|binding| binding.action == action)
    }

    /// Bindings shown in the collapsed footer.
    pub fn short_help(&self) -> Vec<&Keybinding> {
        [KeyAction::Help, KeyAction::Quit]
            .into_iter()
            .filter_map(|action| self.binding(action))
            .collect()
    }

    pub fn full_help(&self) -> Vec<&Keybinding> {
        self.bindings.iter().collect()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_keymap()
    }
}
