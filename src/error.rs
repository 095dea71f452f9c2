//! Error types for the select list component.

use thiserror::Error;

/// Errors returned by [`SelectList`](crate::select_list::SelectList) operations.
///
/// Both variants are contract violations on the caller's side. Empty lists,
/// queries without matches and missing selections are ordinary states and are
/// reported through callbacks, never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectListError {
    /// A property the list cannot work without was not supplied.
    #[error("missing required property `{0}`")]
    MissingProperty(&'static str),

    /// `select_item` was called with an item that is not currently visible.
    #[error("cannot select the specified item because it does not exist")]
    ItemNotFound,
}

/// Result alias used throughout the crate.
pub type Result<T, E = SelectListError> = std::result::Result<T, E>;
