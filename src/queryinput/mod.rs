//! Single-line query input used as the select list's search box.
//!
//! The input is a trimmed-down editor: a value with a cursor, an optional
//! whole-or-partial text selection, deletion and movement key bindings, and a
//! horizontally scrolling view. It reports whether a key or a programmatic
//! `set_value` actually changed the text, which is what the select list uses as
//! its change notification.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_select_list::queryinput::new;
//!
//! let mut input = new();
//! input.focus();
//! input.set_placeholder("Search...");
//! assert!(input.set_value("src"));
//! assert!(!input.set_value("src")); // same text, nothing changed
//!
//! input.select_all();
//! assert_eq!(input.selected_text(), Some("src".to_string()));
//! ```

pub mod keymap;
pub mod methods;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, KeyOutcome, Model};
