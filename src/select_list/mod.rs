//! Filterable select list with a query input and a single selection.
//!
//! [`SelectList<I>`] shows a query input above a live-filtered list of items
//! and tracks one selected item. It is embedded in a host bubbletea model,
//! which forwards messages, calls [`view`](SelectList::view) to draw it and
//! learns about the user's choice through callbacks.
//!
//! ## Data flow
//!
//! User input (typing, key commands, clicks) reaches an operation on the list.
//! The operation recomputes the visible items and/or moves the selection,
//! fires callbacks, and returns a [`RenderHandle`] that resolves once the next
//! frame has been drawn.
//!
//! Visible items are derived in four steps:
//! 1. the query passes through `filter_query`, if set;
//! 2. a custom `filter`, or the default fuzzy filter, keeps matching items
//!    (best match first);
//! 3. `order`, if set, sorts them;
//! 4. `max_results`, if non-zero, truncates them.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_select_list::select_list::{Element, SelectList, SelectListProps};
//! use std::sync::{Arc, Mutex};
//!
//! let confirmed = Arc::new(Mutex::new(None));
//! let sink = Arc::clone(&confirmed);
//!
//! let mut list = SelectList::new(
//!     SelectListProps::new()
//!         .items(vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()])
//!         .element_for_item(|item: &String, _| Element::new(item.clone()))
//!         .did_confirm_selection(move |item| *sink.lock().unwrap() = Some(item.to_string())),
//! )
//! .unwrap();
//!
//! let _ = list.select_next();
//! list.confirm_selection();
//! assert_eq!(confirmed.lock().unwrap().as_deref(), Some("beta"));
//! ```

pub mod element;
pub mod frame;
pub mod keys;
pub mod props;
pub mod style;
pub mod types;
pub mod visibility;

mod filtering;
mod focus;
mod model;
mod rendering;
mod selection;
mod update;

#[cfg(test)]
mod tests;

pub use element::{Element, ElementId, ListItem, LIST_GROUP_CLASS, SELECTED_CLASS};
pub use focus::{EventDisposition, FocusLoss, MouseAction, MouseTarget};
pub use frame::RenderHandle;
pub use keys::{SelectListCommand, SelectListKeyMap, UnknownCommand};
pub use model::SelectList;
pub use props::{SelectListProps, SelectListUpdate};
pub use rendering::Region;
pub use style::SelectListStyles;
pub use types::{Item, ItemRenderOptions};
pub use visibility::{Intersection, ViewportObserver, VisibilityObserver};

use crate::queryinput::KeyOutcome;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl<I: Item> SelectList<I> {
    /// Routes a bubbletea message. Only key messages are handled.
    pub fn handle_msg(&mut self, msg: &Msg) -> EventDisposition {
        match msg.downcast_ref::<KeyMsg>() {
            Some(key_msg) => self.handle_key(key_msg),
            None => EventDisposition::Ignored,
        }
    }

    /// Handles a key press.
    ///
    /// Keys bound to a [`SelectListCommand`] run that command, unless
    /// `skip_commands_registration` was set. Other keys go to the query input
    /// while it has focus; edits to the text re-filter the list. Keys neither
    /// side uses are [`EventDisposition::Ignored`].
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> EventDisposition {
        if !self.skip_commands_registration {
            if let Some(command) = self.key_map.command_for(key_msg) {
                let _ = self.dispatch(command);
                return EventDisposition::PropagationStopped;
            }
        }

        match self.query_input.apply_key(key_msg) {
            KeyOutcome::Ignored => EventDisposition::Ignored,
            KeyOutcome::Consumed => EventDisposition::Handled,
            KeyOutcome::Changed => {
                self.did_change_query();
                let _ = self.request_render();
                EventDisposition::Handled
            }
        }
    }

    /// Runs a command regardless of key bindings.
    pub fn dispatch(&mut self, command: SelectListCommand) -> RenderHandle {
        log::trace!("dispatching {}", command.name());
        match command {
            SelectListCommand::MoveUp => self.select_previous(),
            SelectListCommand::MoveDown => self.select_next(),
            SelectListCommand::MoveToTop => self.select_first(),
            SelectListCommand::MoveToBottom => self.select_last(),
            SelectListCommand::Confirm => {
                self.confirm_selection();
                RenderHandle::ready()
            }
            SelectListCommand::Cancel => {
                self.cancel_selection();
                RenderHandle::ready()
            }
        }
    }
}

impl<I: Item> crate::Component for SelectList<I> {
    fn focus(&mut self) -> Option<Cmd> {
        SelectList::focus(self);
        None
    }

    fn blur(&mut self) {
        self.query_input.blur();
    }

    fn focused(&self) -> bool {
        SelectList::focused(self)
    }
}
