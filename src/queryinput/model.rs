//! Core model for the query input.

use super::keymap::{default_key_map, KeyMap};
use bubbletea_rs::Cmd;
use lipgloss_extras::prelude::*;

/// A single-line text input with cursor and selection.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select_list::queryinput::new;
///
/// let mut input = new();
/// input.focus();
/// input.set_value("hello");
/// input.set_cursor(2);
/// assert_eq!(input.position(), 2);
/// ```
pub struct Model {
    /// Prompt displayed before the text.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style of the character under the cursor while focused.
    pub cursor_style: Style,
    /// Style of selected text.
    pub selection_style: Style,
    /// Maximum display width of the value; 0 means unlimited.
    pub width: usize,
    /// Editing key bindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    /// Other end of the selection; the cursor is the active end.
    pub(super) anchor: Option<usize>,

    // First and one-past-last visible characters when the value overflows `width`.
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

/// What a key press did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key is not one the input handles.
    Ignored,
    /// The key was handled without changing the text, e.g. a cursor move.
    Consumed,
    /// The text changed.
    Changed,
}

/// Creates an unfocused, empty query input with default settings.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        selection_style: Style::new().background(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        }),
        width: 0,
        key_map: default_key_map(),
        value: Vec::new(),
        focus: false,
        pos: 0,
        anchor: None,
        offset: 0,
        offset_right: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("value", &self.value())
            .field("focus", &self.focus)
            .field("pos", &self.pos)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
