//! # bubbletea-select-list
//!
//! A filterable select list for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! applications: a query input above a live-filtered list, one selected item,
//! and callbacks for query edits, selection changes, confirmation and
//! cancellation.
//!
//! ## Modules
//!
//! - [`select_list`]: the list itself (`SelectList<I>`) with its properties,
//!   key commands, styles and row rendering
//! - [`queryinput`]: the single-line editor used for the query
//! - [`fuzzy`]: the relevance score used by the default filter
//! - [`key`]: type-safe key bindings
//! - [`error`]: the crate error type
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_select_list::prelude::*;
//!
//! let mut list = SelectList::new(
//!     SelectListProps::new()
//!         .items(vec!["open file".to_string(), "close tab".to_string(), "open folder".to_string()])
//!         .element_for_item(|item: &String, _| Element::new(item.clone()))
//!         .empty_message("No commands"),
//! )
//! .unwrap();
//!
//! let _ = list.update(SelectListUpdate::new().query("open"));
//! assert_eq!(list.visible_items().len(), 2);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The list does not implement the bubbletea `Model` trait itself; the
//! application owns it and forwards messages:
//!
//! ```rust
//! use bubbletea_select_list::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     picker: SelectList<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut picker = SelectList::new(
//!             SelectListProps::new()
//!                 .items(vec!["one".to_string(), "two".to_string()])
//!                 .element_for_item(|item: &String, _| Element::new(item.clone()))
//!                 .height(10),
//!         )
//!         .unwrap();
//!         picker.focus();
//!         (Self { picker }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.picker.handle_msg(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.picker.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger. Recomputes and focus-driven cancellation are logged at
//! `debug`, row patches and visibility reports at `trace`.

pub mod error;
pub mod fuzzy;
pub mod key;
pub mod queryinput;
pub mod select_list;

use bubbletea_rs::Cmd;

/// Components that can hold keyboard focus.
///
/// ```rust
/// use bubbletea_select_list::prelude::*;
///
/// fn toggle<T: Component>(component: &mut T) {
///     if component.focused() {
///         component.blur();
///     } else {
///         let _ = component.focus();
///     }
/// }
///
/// let mut input = queryinput_new();
/// toggle(&mut input);
/// assert!(input.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use error::{Result, SelectListError};
pub use key::{Binding, KeyPress};
pub use queryinput::Model as QueryInput;
pub use select_list::{SelectList, SelectListProps, SelectListUpdate};

/// Everything needed to embed a select list.
pub mod prelude {
    pub use crate::error::{Result, SelectListError};
    pub use crate::key::{
        matches_binding, new_binding, with_keys_str, Binding, Help as KeyHelp, KeyPress,
    };
    pub use crate::queryinput::{
        default_key_map as queryinput_default_key_map, new as queryinput_new,
        KeyMap as QueryInputKeyMap, Model as QueryInput,
    };
    pub use crate::select_list::{
        Element, ElementId, EventDisposition, FocusLoss, Intersection, Item, ItemRenderOptions,
        ListItem, MouseAction, MouseTarget, Region, RenderHandle, SelectList, SelectListCommand,
        SelectListKeyMap, SelectListProps, SelectListStyles, SelectListUpdate, ViewportObserver,
        VisibilityObserver,
    };
    pub use crate::Component;
}
