//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown for
//! them. Bindings are built either from crossterm key codes directly or from
//! human readable names such as `"ctrl+p"` or `"enter"`:
//!
//! ```rust
//! use bubbletea_select_list::key::{new_binding, with_keys_str};
//!
//! let up = new_binding(with_keys_str(&["up", "ctrl+p"])).with_help("↑/ctrl+p", "move up");
//! assert_eq!(up.keys().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held while pressing `code`.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and its modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Reports whether this key press describes the given key message.
    ///
    /// Shift is ignored for printable characters since terminals already fold
    /// it into the character (`'G'` rather than `shift+g`).
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if self.code != key_msg.key {
            return false;
        }
        let relevant = |m: KeyModifiers| {
            if matches!(self.code, KeyCode::Char(_)) {
                m.difference(KeyModifiers::SHIFT)
            } else {
                m
            }
        };
        relevant(self.modifiers) == relevant(key_msg.modifiers)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

/// Help text displayed for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key description, e.g. `"↑/ctrl+p"`.
    pub key: String,
    /// What the binding does, e.g. `"move up"`.
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    ///
    /// ```rust
    /// use bubbletea_select_list::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let confirm = Binding::new(vec![KeyCode::Enter]);
    /// assert!(confirm.enabled());
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Replaces the key presses, keeping the help text.
    pub fn set_keys(&mut self, keys: Vec<KeyPress>) {
        self.keys = keys;
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding can currently match a key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(key_msg))
    }
}

/// Creates a binding from already parsed key presses.
pub fn new_binding(keys: Vec<KeyPress>) -> Binding {
    Binding::new(keys)
}

/// Parses key names like `"ctrl+home"` into key presses.
///
/// Names that cannot be parsed are skipped.
pub fn with_keys_str(keys: &[&str]) -> Vec<KeyPress> {
    keys.iter()
        .filter_map(|name| {
            let parsed = parse_key(name);
            if parsed.is_none() {
                log::warn!("ignoring unknown key name {name:?}");
            }
            parsed
        })
        .collect()
}

/// Reports whether the key message triggers the binding.
pub fn matches_binding(key_msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(key_msg)
}

/// Parses a single key name such as `"alt+backspace"` or `"G"`.
pub fn parse_key(name: &str) -> Option<KeyPress> {
    let mut parts: Vec<&str> = name.split('+').collect();
    let key = parts.pop()?;
    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= match part.to_ascii_lowercase().as_str() {
            "ctrl" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let code = match key.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress::new(code, modifiers))
}
