//! Construction properties and partial updates.
//!
//! [`SelectListProps`] is consumed by [`SelectList::new`](super::SelectList::new);
//! [`SelectListUpdate`] is a sparse record passed to
//! [`SelectList::update`](super::SelectList::update). Setters on both follow the
//! same chain style:
//!
//! ```rust
//! use bubbletea_select_list::select_list::{Element, SelectListProps, SelectListUpdate};
//!
//! let props = SelectListProps::new()
//!     .items(vec!["Grace".to_string(), "Johnathan".to_string()])
//!     .element_for_item(|item: &String, _| Element::new(item.clone()))
//!     .max_results(10)
//!     .empty_message("No matches");
//!
//! let update = SelectListUpdate::<String>::new()
//!     .query("Jo")
//!     .clear_max_results();
//! # let _ = (props, update);
//! ```

use super::element::Element;
use super::keys::SelectListKeyMap;
use super::style::SelectListStyles;
use super::types::{
    Callback, ConfirmCallback, ElementForItem, FilterFn, FilterKeyFn, Item, ItemRenderOptions,
    OrderFn, QueryCallback, QueryTransformFn, SelectionCallback,
};
use super::visibility::VisibilityObserver;
use std::cmp::Ordering;
use std::sync::Arc;

/// Everything a [`SelectList`](super::SelectList) can be built with.
///
/// `items` and `element_for_item` are required; everything else is optional.
pub struct SelectListProps<I: Item> {
    pub(super) items: Option<Vec<Arc<I>>>,
    pub(super) element_for_item: Option<ElementForItem<I>>,
    pub(super) max_results: Option<usize>,
    pub(super) filter: Option<FilterFn<I>>,
    pub(super) filter_key_for_item: Option<FilterKeyFn<I>>,
    pub(super) filter_query: Option<QueryTransformFn>,
    pub(super) order: Option<OrderFn<I>>,
    pub(super) initial_selection_index: Option<usize>,
    pub(super) initially_visible_item_count: Option<usize>,
    pub(super) empty_message: Option<String>,
    pub(super) error_message: Option<String>,
    pub(super) info_message: Option<String>,
    pub(super) loading_message: Option<String>,
    pub(super) loading_badge: Option<String>,
    pub(super) items_class_list: Vec<String>,
    pub(super) did_change_query: Option<QueryCallback>,
    pub(super) did_change_selection: Option<SelectionCallback<I>>,
    pub(super) did_confirm_selection: Option<ConfirmCallback<I>>,
    pub(super) did_confirm_empty_selection: Option<Callback>,
    pub(super) did_cancel_selection: Option<Callback>,
    pub(super) skip_commands_registration: bool,
    pub(super) visibility_observer: Option<Box<dyn VisibilityObserver>>,
    pub(super) height: Option<usize>,
    pub(super) styles: SelectListStyles,
    pub(super) key_map: SelectListKeyMap,
}

impl<I: Item> SelectListProps<I> {
    /// Empty properties: no items, no renderer, first item selected initially.
    pub fn new() -> Self {
        Self {
            items: None,
            element_for_item: None,
            max_results: None,
            filter: None,
            filter_key_for_item: None,
            filter_query: None,
            order: None,
            initial_selection_index: Some(0),
            initially_visible_item_count: None,
            empty_message: None,
            error_message: None,
            info_message: None,
            loading_message: None,
            loading_badge: None,
            items_class_list: Vec::new(),
            did_change_query: None,
            did_change_selection: None,
            did_confirm_selection: None,
            did_confirm_empty_selection: None,
            did_cancel_selection: None,
            skip_commands_registration: false,
            visibility_observer: None,
            height: None,
            styles: SelectListStyles::default(),
            key_map: SelectListKeyMap::default(),
        }
    }

    /// Sets the candidate items.
    pub fn items(self, items: impl IntoIterator<Item = I>) -> Self {
        self.shared_items(items.into_iter().map(Arc::new).collect())
    }

    /// Sets candidate items that are already shared. Selection callbacks hand
    /// back these same `Arc`s.
    pub fn shared_items(mut self, items: Vec<Arc<I>>) -> Self {
        self.items = Some(items);
        self
    }

    /// Sets the row renderer.
    pub fn element_for_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, ItemRenderOptions) -> Element + Send + 'static,
    {
        self.element_for_item = Some(Box::new(f));
        self
    }

    /// Caps the number of visible items. `0` means no cap.
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Replaces the default fuzzy filter.
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<Arc<I>>, &str) -> Vec<Arc<I>> + Send + 'static,
    {
        self.filter = Some(Box::new(f));
        self
    }

    /// Sets the text the default filter scores for each item.
    pub fn filter_key_for_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&I) -> String + Send + 'static,
    {
        self.filter_key_for_item = Some(Box::new(f));
        self
    }

    /// Transforms the raw query before filtering.
    pub fn filter_query<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + 'static,
    {
        self.filter_query = Some(Box::new(f));
        self
    }

    /// Orders filtered items before truncation.
    pub fn order<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &I) -> Ordering + Send + 'static,
    {
        self.order = Some(Box::new(f));
        self
    }

    /// Index selected after each recompute; `None` starts with nothing selected.
    pub fn initial_selection_index(mut self, index: Option<usize>) -> Self {
        self.initial_selection_index = index;
        self
    }

    /// Rows past this index are rendered as not visible until scrolled into view.
    pub fn initially_visible_item_count(mut self, count: usize) -> Self {
        self.initially_visible_item_count = Some(count);
        self
    }

    /// Message shown when nothing matches.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Error message shown above the list.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Informational message shown above the list.
    pub fn info_message(mut self, message: impl Into<String>) -> Self {
        self.info_message = Some(message.into());
        self
    }

    /// Loading message; suppresses the empty message while set.
    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = Some(message.into());
        self
    }

    /// Badge shown next to the loading message.
    pub fn loading_badge(mut self, badge: impl Into<String>) -> Self {
        self.loading_badge = Some(badge.into());
        self
    }

    /// Extra classes for the items container.
    pub fn items_class_list<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.items_class_list = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Called with the effective query after each query edit.
    pub fn did_change_query<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.did_change_query = Some(Box::new(f));
        self
    }

    /// Called whenever an index is requested for selection.
    pub fn did_change_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&Arc<I>>) + Send + 'static,
    {
        self.did_change_selection = Some(Box::new(f));
        self
    }

    /// Called when a selected item is confirmed.
    pub fn did_confirm_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Arc<I>) + Send + 'static,
    {
        self.did_confirm_selection = Some(Box::new(f));
        self
    }

    /// Called when confirming with nothing selected.
    pub fn did_confirm_empty_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.did_confirm_empty_selection = Some(Box::new(f));
        self
    }

    /// Called on cancellation.
    pub fn did_cancel_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.did_cancel_selection = Some(Box::new(f));
        self
    }

    /// Leaves key command handling to the host, which calls
    /// [`dispatch`](super::SelectList::dispatch) instead.
    pub fn skip_commands_registration(mut self, skip: bool) -> Self {
        self.skip_commands_registration = skip;
        self
    }

    /// Replaces the built-in viewport observer.
    pub fn visibility_observer(mut self, observer: impl VisibilityObserver + 'static) -> Self {
        self.visibility_observer = Some(Box::new(observer));
        self
    }

    /// Number of rows shown at once. Unbounded by default.
    pub fn height(mut self, rows: usize) -> Self {
        self.height = Some(rows);
        self
    }

    /// Replaces the default styles.
    pub fn styles(mut self, styles: SelectListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the default key bindings.
    pub fn key_map(mut self, key_map: SelectListKeyMap) -> Self {
        self.key_map = key_map;
        self
    }
}

impl<I: Item> Default for SelectListProps<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial update. Fields that were never set are left untouched.
///
/// Clearable options are stored as `Option<Option<T>>`: the outer level records
/// whether the field was set at all, the inner one the new value.
pub struct SelectListUpdate<I: Item> {
    pub(super) items: Option<Vec<Arc<I>>>,
    pub(super) element_for_item: Option<ElementForItem<I>>,
    pub(super) max_results: Option<Option<usize>>,
    pub(super) filter: Option<Option<FilterFn<I>>>,
    pub(super) filter_key_for_item: Option<Option<FilterKeyFn<I>>>,
    pub(super) filter_query: Option<Option<QueryTransformFn>>,
    pub(super) order: Option<Option<OrderFn<I>>>,
    pub(super) query: Option<String>,
    pub(super) select_query: Option<bool>,
    pub(super) initial_selection_index: Option<Option<usize>>,
    pub(super) initially_visible_item_count: Option<Option<usize>>,
    pub(super) empty_message: Option<Option<String>>,
    pub(super) error_message: Option<Option<String>>,
    pub(super) info_message: Option<Option<String>>,
    pub(super) loading_message: Option<Option<String>>,
    pub(super) loading_badge: Option<Option<String>>,
    pub(super) items_class_list: Option<Vec<String>>,
    pub(super) did_change_query: Option<Option<QueryCallback>>,
    pub(super) did_change_selection: Option<Option<SelectionCallback<I>>>,
    pub(super) did_confirm_selection: Option<Option<ConfirmCallback<I>>>,
    pub(super) did_confirm_empty_selection: Option<Option<Callback>>,
    pub(super) did_cancel_selection: Option<Option<Callback>>,
}

macro_rules! message_setters {
    ($($field:ident, $clear:ident, $doc:literal;)*) => {
        $(
            #[doc = concat!("Sets the ", $doc, ".")]
            pub fn $field(mut self, message: impl Into<String>) -> Self {
                self.$field = Some(Some(message.into()));
                self
            }

            #[doc = concat!("Removes the ", $doc, ".")]
            pub fn $clear(mut self) -> Self {
                self.$field = Some(None);
                self
            }
        )*
    };
}

impl<I: Item> SelectListUpdate<I> {
    /// An update that changes nothing. Applying it only refreshes the rows.
    pub fn new() -> Self {
        Self {
            items: None,
            element_for_item: None,
            max_results: None,
            filter: None,
            filter_key_for_item: None,
            filter_query: None,
            order: None,
            query: None,
            select_query: None,
            initial_selection_index: None,
            initially_visible_item_count: None,
            empty_message: None,
            error_message: None,
            info_message: None,
            loading_message: None,
            loading_badge: None,
            items_class_list: None,
            did_change_query: None,
            did_change_selection: None,
            did_confirm_selection: None,
            did_confirm_empty_selection: None,
            did_cancel_selection: None,
        }
    }

    /// Whether no field was set.
    pub fn is_empty(&self) -> bool {
        self.items.is_none()
            && self.element_for_item.is_none()
            && self.max_results.is_none()
            && self.filter.is_none()
            && self.filter_key_for_item.is_none()
            && self.filter_query.is_none()
            && self.order.is_none()
            && self.query.is_none()
            && self.select_query.is_none()
            && self.initial_selection_index.is_none()
            && self.initially_visible_item_count.is_none()
            && self.empty_message.is_none()
            && self.error_message.is_none()
            && self.info_message.is_none()
            && self.loading_message.is_none()
            && self.loading_badge.is_none()
            && self.items_class_list.is_none()
            && self.did_change_query.is_none()
            && self.did_change_selection.is_none()
            && self.did_confirm_selection.is_none()
            && self.did_confirm_empty_selection.is_none()
            && self.did_cancel_selection.is_none()
    }

    /// Replaces the candidate items.
    pub fn items(self, items: impl IntoIterator<Item = I>) -> Self {
        self.shared_items(items.into_iter().map(Arc::new).collect())
    }

    /// Replaces the candidate items with already shared ones.
    pub fn shared_items(mut self, items: Vec<Arc<I>>) -> Self {
        self.items = Some(items);
        self
    }

    /// Replaces the row renderer.
    pub fn element_for_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, ItemRenderOptions) -> Element + Send + 'static,
    {
        self.element_for_item = Some(Box::new(f));
        self
    }

    /// Caps the number of visible items. `0` means no cap.
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = Some(Some(max));
        self
    }

    /// Removes the result cap.
    pub fn clear_max_results(mut self) -> Self {
        self.max_results = Some(None);
        self
    }

    /// Replaces the filter.
    pub fn filter<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<Arc<I>>, &str) -> Vec<Arc<I>> + Send + 'static,
    {
        self.filter = Some(Some(Box::new(f)));
        self
    }

    /// Goes back to the default fuzzy filter.
    pub fn clear_filter(mut self) -> Self {
        self.filter = Some(None);
        self
    }

    /// Replaces the filter key function. Takes effect on the next recompute.
    pub fn filter_key_for_item<F>(mut self, f: F) -> Self
    where
        F: Fn(&I) -> String + Send + 'static,
    {
        self.filter_key_for_item = Some(Some(Box::new(f)));
        self
    }

    /// Goes back to filtering on [`Item::filter_value`].
    pub fn clear_filter_key_for_item(mut self) -> Self {
        self.filter_key_for_item = Some(None);
        self
    }

    /// Replaces the query transform.
    pub fn filter_query<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + 'static,
    {
        self.filter_query = Some(Some(Box::new(f)));
        self
    }

    /// Filters on the raw query again.
    pub fn clear_filter_query(mut self) -> Self {
        self.filter_query = Some(None);
        self
    }

    /// Replaces the ordering. Takes effect on the next recompute.
    pub fn order<F>(mut self, f: F) -> Self
    where
        F: Fn(&I, &I) -> Ordering + Send + 'static,
    {
        self.order = Some(Some(Box::new(f)));
        self
    }

    /// Keeps filter order.
    pub fn clear_order(mut self) -> Self {
        self.order = Some(None);
        self
    }

    /// Sets the query text.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Selects (`true`) or deselects (`false`) the whole query text.
    pub fn select_query(mut self, select: bool) -> Self {
        self.select_query = Some(select);
        self
    }

    /// Index selected after the next recompute.
    pub fn initial_selection_index(mut self, index: Option<usize>) -> Self {
        self.initial_selection_index = Some(index);
        self
    }

    /// Sets or clears the initially visible row count.
    pub fn initially_visible_item_count(mut self, count: Option<usize>) -> Self {
        self.initially_visible_item_count = Some(count);
        self
    }

    message_setters! {
        empty_message, clear_empty_message, "message shown when nothing matches";
        error_message, clear_error_message, "error message";
        info_message, clear_info_message, "informational message";
        loading_message, clear_loading_message, "loading message";
        loading_badge, clear_loading_badge, "loading badge";
    }

    /// Replaces the extra container classes.
    pub fn items_class_list<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.items_class_list = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the query callback.
    pub fn did_change_query<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.did_change_query = Some(Some(Box::new(f)));
        self
    }

    /// Replaces the selection callback.
    pub fn did_change_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&Arc<I>>) + Send + 'static,
    {
        self.did_change_selection = Some(Some(Box::new(f)));
        self
    }

    /// Replaces the confirm callback.
    pub fn did_confirm_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Arc<I>) + Send + 'static,
    {
        self.did_confirm_selection = Some(Some(Box::new(f)));
        self
    }

    /// Replaces the empty-confirm callback.
    pub fn did_confirm_empty_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.did_confirm_empty_selection = Some(Some(Box::new(f)));
        self
    }

    /// Replaces the cancel callback.
    pub fn did_cancel_selection<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.did_cancel_selection = Some(Some(Box::new(f)));
        self
    }
}

impl<I: Item> Default for SelectListUpdate<I> {
    fn default() -> Self {
        Self::new()
    }
}
