//! Editing, movement and selection methods for the query input.

use super::model::{KeyOutcome, Model};
use crate::key::matches_binding;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

impl Model {
    /// Returns the current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text and moves the cursor to the end.
    ///
    /// Returns `true` when the text actually changed.
    pub fn set_value(&mut self, s: &str) -> bool {
        let new_value: Vec<char> = s.chars().collect();
        let changed = new_value != self.value;
        self.value = new_value;
        self.anchor = None;
        self.pos = self.value.len();
        self.handle_overflow();
        changed
    }

    /// Returns the cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value, and drops any selection.
    pub fn set_cursor(&mut self, pos: usize) {
        self.anchor = None;
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the text.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the text.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Gives the input keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Whether the input has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the placeholder shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the maximum display width; 0 disables scrolling.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Selects the whole text, leaving the cursor at the end.
    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.pos = self.value.len();
        self.handle_overflow();
    }

    /// Drops the selection without moving the cursor.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Whether a non-empty range of text is selected.
    pub fn has_selection(&self) -> bool {
        self.selection_range().is_some()
    }

    /// Returns the selected text, if any.
    pub fn selected_text(&self) -> Option<String> {
        self.selection_range()
            .map(|range| self.value[range].iter().collect())
    }

    pub(super) fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let range = anchor.min(self.pos)..anchor.max(self.pos);
        (!range.is_empty()).then_some(range)
    }

    /// Processes a message while focused.
    ///
    /// Returns `true` when the text changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        match msg.downcast_ref::<KeyMsg>() {
            Some(key_msg) => self.handle_key(key_msg),
            None => false,
        }
    }

    /// Applies a key press while focused.
    ///
    /// Returns `true` when the text changed.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        self.apply_key(key_msg) == KeyOutcome::Changed
    }

    /// Applies a key press while focused and reports what it did.
    ///
    /// Keys the input has no use for, and every key while blurred, are
    /// [`KeyOutcome::Ignored`] so the host can route them elsewhere.
    pub fn apply_key(&mut self, key_msg: &KeyMsg) -> KeyOutcome {
        if !self.focus {
            return KeyOutcome::Ignored;
        }
        let before = self.value.clone();

        let consumed = if matches_binding(key_msg, &self.key_map.select_all) {
            self.select_all();
            true
        } else {
            self.handle_deletion_keys(key_msg)
                || self.handle_movement_keys(key_msg)
                || self.handle_character_input(key_msg)
        };
        if !consumed {
            return KeyOutcome::Ignored;
        }

        self.handle_overflow();
        if before != self.value {
            KeyOutcome::Changed
        } else {
            KeyOutcome::Consumed
        }
    }

    /// Handle deletion-related key bindings
    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        let backward = matches_binding(key_msg, &km.delete_character_backward);
        let forward = matches_binding(key_msg, &km.delete_character_forward);
        let word_backward = matches_binding(key_msg, &km.delete_word_backward);
        let word_forward = matches_binding(key_msg, &km.delete_word_forward);
        let after = matches_binding(key_msg, &km.delete_after_cursor);
        let before = matches_binding(key_msg, &km.delete_before_cursor);

        if !(backward || forward || word_backward || word_forward || after || before) {
            return false;
        }
        if (backward || forward) && self.delete_selection() {
            return true;
        }
        self.anchor = None;

        if word_backward {
            self.delete_word_backward();
        } else if backward {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if forward {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if after {
            self.value.truncate(self.pos);
        } else if before {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if word_forward {
            self.delete_word_forward();
        }
        true
    }

    /// Handle movement-related key bindings
    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            let pos = self.pos.saturating_sub(1);
            self.set_cursor(pos);
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            let pos = self.pos + 1;
            self.set_cursor(pos);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    /// Handle regular character input
    fn handle_character_input(&mut self, key_msg: &KeyMsg) -> bool {
        let KeyCode::Char(ch) = key_msg.key else {
            return false;
        };
        // Shift is encoded in the character itself.
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return false;
        }
        self.insert_chars(&[ch]);
        true
    }

    /// Inserts characters at the cursor, replacing the selection.
    pub(super) fn insert_chars(&mut self, chars: &[char]) {
        self.delete_selection();
        let tail = self.value.split_off(self.pos);
        self.value.extend_from_slice(chars);
        self.value.extend(tail);
        self.pos += chars.len();
    }

    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_range() else {
            self.anchor = None;
            return false;
        };
        self.pos = range.start;
        self.value.drain(range);
        self.anchor = None;
        true
    }

    fn delete_word_backward(&mut self) {
        let end = self.pos;
        self.word_backward();
        self.value.drain(self.pos..end);
    }

    fn delete_word_forward(&mut self) {
        let start = self.pos;
        self.word_forward();
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    fn word_backward(&mut self) {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        self.set_cursor(i);
    }

    fn word_forward(&mut self) {
        let mut i = self.pos;
        let len = self.value.len();
        while i < len && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < len && !self.value[i].is_whitespace() {
            i += 1;
        }
        self.set_cursor(i);
    }

    /// Keeps the cursor inside the visible window when the value is wider than
    /// `width`.
    pub(super) fn handle_overflow(&mut self) {
        let total: usize = self.value.iter().map(|&c| char_width(c)).sum();
        if self.width == 0 || total <= self.width {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());
        self.offset = self.offset.min(self.offset_right);

        if self.pos < self.offset {
            self.offset = self.pos;
            let mut w = 0;
            let mut i = self.offset;
            while i < self.value.len() && w + char_width(self.value[i]) <= self.width {
                w += char_width(self.value[i]);
                i += 1;
            }
            self.offset_right = i;
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 && w + char_width(self.value[i - 1]) <= self.width {
                w += char_width(self.value[i - 1]);
                i -= 1;
            }
            self.offset = i;
        }
    }
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}
