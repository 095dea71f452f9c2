//! Key commands handled by the select list.
//!
//! Six commands drive the list from the keyboard. Each has a stable name so a
//! host that routes keys itself (see `skip_commands_registration`) can map its
//! own command strings onto them:
//!
//! | Command | Name | Default keys |
//! |---|---|---|
//! | [`MoveUp`](SelectListCommand::MoveUp) | `core:move-up` | `↑`, `ctrl+p` |
//! | [`MoveDown`](SelectListCommand::MoveDown) | `core:move-down` | `↓`, `ctrl+n` |
//! | [`MoveToTop`](SelectListCommand::MoveToTop) | `core:move-to-top` | `ctrl+home` |
//! | [`MoveToBottom`](SelectListCommand::MoveToBottom) | `core:move-to-bottom` | `ctrl+end` |
//! | [`Confirm`](SelectListCommand::Confirm) | `core:confirm` | `enter` |
//! | [`Cancel`](SelectListCommand::Cancel) | `core:cancel` | `esc` |
//!
//! ```rust
//! use bubbletea_select_list::select_list::SelectListCommand;
//!
//! let cmd: SelectListCommand = "core:move-down".parse().unwrap();
//! assert_eq!(cmd, SelectListCommand::MoveDown);
//! assert_eq!(cmd.name(), "core:move-down");
//! ```

use crate::key::{new_binding, with_keys_str, Binding};
use bubbletea_rs::KeyMsg;
use std::str::FromStr;

/// A keyboard command understood by the select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectListCommand {
    /// Select the previous item, wrapping to the last.
    MoveUp,
    /// Select the next item, wrapping to the first.
    MoveDown,
    /// Select the first item.
    MoveToTop,
    /// Select the last item.
    MoveToBottom,
    /// Confirm the selection.
    Confirm,
    /// Cancel the selection.
    Cancel,
}

impl SelectListCommand {
    /// Every command, in table order.
    pub const ALL: [SelectListCommand; 6] = [
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveToTop,
        Self::MoveToBottom,
        Self::Confirm,
        Self::Cancel,
    ];

    /// The command's name, e.g. `"core:confirm"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveUp => "core:move-up",
            Self::MoveDown => "core:move-down",
            Self::MoveToTop => "core:move-to-top",
            Self::MoveToBottom => "core:move-to-bottom",
            Self::Confirm => "core:confirm",
            Self::Cancel => "core:cancel",
        }
    }
}

/// Returned when parsing a command name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown select list command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for SelectListCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Key bindings for the select list commands.
#[derive(Debug, Clone)]
pub struct SelectListKeyMap {
    /// Select the previous item.
    pub move_up: Binding,
    /// Select the next item.
    pub move_down: Binding,
    /// Select the first item.
    pub move_to_top: Binding,
    /// Select the last item.
    pub move_to_bottom: Binding,
    /// Confirm the selection.
    pub confirm: Binding,
    /// Cancel the selection.
    pub cancel: Binding,
}

impl Default for SelectListKeyMap {
    fn default() -> Self {
        Self {
            move_up: new_binding(with_keys_str(&["up", "ctrl+p"])).with_help("↑/ctrl+p", "up"),
            move_down: new_binding(with_keys_str(&["down", "ctrl+n"]))
                .with_help("↓/ctrl+n", "down"),
            move_to_top: new_binding(with_keys_str(&["ctrl+home"])).with_help("ctrl+home", "top"),
            move_to_bottom: new_binding(with_keys_str(&["ctrl+end"]))
                .with_help("ctrl+end", "bottom"),
            confirm: new_binding(with_keys_str(&["enter"])).with_help("enter", "confirm"),
            cancel: new_binding(with_keys_str(&["esc"])).with_help("esc", "cancel"),
        }
    }
}

impl SelectListKeyMap {
    /// The command bound to `key_msg`, if any.
    pub fn command_for(&self, key_msg: &KeyMsg) -> Option<SelectListCommand> {
        SelectListCommand::ALL
            .into_iter()
            .find(|cmd| self.binding(*cmd).matches(key_msg))
    }

    /// The binding for a command.
    pub fn binding(&self, command: SelectListCommand) -> &Binding {
        match command {
            SelectListCommand::MoveUp => &self.move_up,
            SelectListCommand::MoveDown => &self.move_down,
            SelectListCommand::MoveToTop => &self.move_to_top,
            SelectListCommand::MoveToBottom => &self.move_to_bottom,
            SelectListCommand::Confirm => &self.confirm,
            SelectListCommand::Cancel => &self.cancel,
        }
    }

    /// Bindings in the order help views list them.
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![&self.move_up, &self.move_down, &self.confirm, &self.cancel]
    }
}
