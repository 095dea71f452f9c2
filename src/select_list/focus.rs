//! Focus and pointer handling.

use super::frame::RenderHandle;
use super::model::SelectList;
use super::types::Item;

/// What the host knows about a focus loss of the query input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusLoss {
    /// Focus moved to another part of the select list.
    pub related_target_inside: bool,
    /// The application as a whole still has focus.
    pub document_has_focus: bool,
}

/// Where a pointer event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseTarget {
    /// The row at this index among the visible items.
    Row(usize),
    /// The rows container itself, e.g. its scrollbar.
    ItemsList,
    /// Anywhere else.
    Other,
}

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Press and release on the same target.
    Click,
}

/// How the list handled an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Not handled; the host may process it further.
    Ignored,
    /// Delivered to the query input.
    Handled,
    /// Handled; the host must not run its default action (e.g. moving focus).
    DefaultPrevented,
    /// Handled as a list command; the host must not process it further.
    PropagationStopped,
}

impl<I: Item> SelectList<I> {
    /// Focuses the query input.
    pub fn focus(&mut self) {
        self.query_input.focus();
    }

    /// Whether the query input has focus.
    pub fn focused(&self) -> bool {
        self.query_input.focused()
    }

    /// Clears the query text, running the query-change path if it was not
    /// already empty.
    pub fn reset(&mut self) -> RenderHandle {
        if self.query_input.set_value("") {
            self.did_change_query();
        }
        self.request_render()
    }

    /// Handles the query input losing focus.
    ///
    /// A loss caused by pressing the list itself keeps focus in the query
    /// input. Otherwise the selection is cancelled, unless the whole
    /// application lost focus.
    pub fn did_lose_focus(&mut self, loss: FocusLoss) {
        if self.did_click_items_list || loss.related_target_inside {
            self.did_click_items_list = false;
            self.query_input.focus();
            return;
        }

        self.query_input.blur();
        if loss.document_has_focus {
            log::debug!("focus left the select list, cancelling");
            self.cancel_selection();
        }
    }

    /// Handles a pointer event.
    ///
    /// Pressing or releasing on a row prevents the default action so the
    /// query input keeps focus; clicking a row selects and confirms it.
    /// Pressing the container marks the next focus loss as internal.
    pub fn handle_mouse(&mut self, target: MouseTarget, action: MouseAction) -> EventDisposition {
        match (target, action) {
            (MouseTarget::Row(index), _) if index >= self.visible_items.len() => {
                EventDisposition::Ignored
            }
            (MouseTarget::Row(_), MouseAction::Down | MouseAction::Up) => {
                EventDisposition::DefaultPrevented
            }
            (MouseTarget::Row(index), MouseAction::Click) => {
                let _ = self.select_index(index as isize);
                self.confirm_selection();
                EventDisposition::DefaultPrevented
            }
            (MouseTarget::ItemsList, MouseAction::Down) => {
                self.did_click_items_list = true;
                EventDisposition::Ignored
            }
            _ => EventDisposition::Ignored,
        }
    }
}
