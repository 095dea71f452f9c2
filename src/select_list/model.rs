//! The [`SelectList`] state and its lifecycle.

use super::element::{ElementId, ListItem};
use super::frame::FrameClock;
use super::keys::SelectListKeyMap;
use super::props::SelectListProps;
use super::style::SelectListStyles;
use super::types::{
    Callback, ConfirmCallback, ElementForItem, FilterFn, FilterKeyFn, Item, OrderFn,
    QueryCallback, QueryTransformFn, SelectionCallback,
};
use super::visibility::{ViewportObserver, VisibilityObserver};
use crate::error::{Result, SelectListError};
use crate::fuzzy::FuzzyScorer;
use crate::queryinput;
use std::sync::Arc;

/// Notification hooks supplied by the embedding application.
pub(super) struct Callbacks<I: Item> {
    pub(super) did_change_query: Option<QueryCallback>,
    pub(super) did_change_selection: Option<SelectionCallback<I>>,
    pub(super) did_confirm_selection: Option<ConfirmCallback<I>>,
    pub(super) did_confirm_empty_selection: Option<Callback>,
    pub(super) did_cancel_selection: Option<Callback>,
}

/// Presentational text around the rows.
#[derive(Debug, Clone, Default)]
pub(super) struct Messages {
    pub(super) empty: Option<String>,
    pub(super) error: Option<String>,
    pub(super) info: Option<String>,
    pub(super) loading: Option<String>,
    pub(super) loading_badge: Option<String>,
}

/// A filterable list with a query input and a single selected item.
///
/// The list keeps three things consistent: the full set of `items`, the
/// filtered and ordered `visible_items` derived from them and the query, and
/// the index of the selected visible item. Every mutating operation finishes
/// its state change before returning and hands back a
/// [`RenderHandle`](super::RenderHandle) for the frame that will show it.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select_list::select_list::{Element, SelectList, SelectListProps, SelectListUpdate};
///
/// let mut list = SelectList::new(
///     SelectListProps::new()
///         .items(vec!["Grace".to_string(), "Johnathan".to_string(), "Joanna".to_string()])
///         .element_for_item(|name: &String, _| Element::new(name.clone())),
/// )
/// .unwrap();
///
/// let _ = list.update(SelectListUpdate::new().query("Jon"));
/// let names: Vec<&str> = list.visible_items().iter().map(|s| s.as_str()).collect();
/// assert_eq!(names, ["Joanna", "Johnathan"]);
/// assert_eq!(list.selected_item().map(|s| s.as_str()), Some("Joanna"));
/// ```
pub struct SelectList<I: Item> {
    pub(super) items: Vec<Arc<I>>,
    pub(super) visible_items: Vec<Arc<I>>,
    pub(super) selection_index: Option<usize>,

    pub(super) element_for_item: ElementForItem<I>,
    pub(super) max_results: Option<usize>,
    pub(super) filter: Option<FilterFn<I>>,
    pub(super) filter_key_for_item: Option<FilterKeyFn<I>>,
    pub(super) filter_query: Option<QueryTransformFn>,
    pub(super) order: Option<OrderFn<I>>,
    pub(super) initial_selection_index: Option<usize>,
    pub(super) initially_visible_item_count: Option<usize>,
    pub(super) messages: Messages,
    pub(super) items_class_list: Vec<String>,
    pub(super) callbacks: Callbacks<I>,
    pub(super) skip_commands_registration: bool,

    pub(super) query_input: queryinput::Model,
    pub(super) scorer: FuzzyScorer,
    pub(super) key_map: SelectListKeyMap,
    pub(super) styles: SelectListStyles,

    /// `None` while a full render is pending.
    pub(super) rows: Option<Vec<ListItem>>,
    pub(super) next_element_id: u64,
    pub(super) visibility_observer: Box<dyn VisibilityObserver>,
    pub(super) height: Option<usize>,
    pub(super) viewport_start: usize,
    // Set by a press on the list container itself (its scrollbar), consumed by the next focus loss.
    pub(super) did_click_items_list: bool,
    pub(super) frames: FrameClock,
}

impl<I: Item> SelectList<I> {
    /// Builds a list, computes the visible items and renders the rows.
    ///
    /// `did_change_selection` fires once during construction for the initial
    /// selection (unless `initial_selection_index` is `None`).
    ///
    /// # Errors
    ///
    /// [`SelectListError::MissingProperty`] when `items` or
    /// `element_for_item` was not supplied.
    pub fn new(props: SelectListProps<I>) -> Result<Self> {
        let SelectListProps {
            items,
            element_for_item,
            max_results,
            filter,
            filter_key_for_item,
            filter_query,
            order,
            initial_selection_index,
            initially_visible_item_count,
            empty_message,
            error_message,
            info_message,
            loading_message,
            loading_badge,
            items_class_list,
            did_change_query,
            did_change_selection,
            did_confirm_selection,
            did_confirm_empty_selection,
            did_cancel_selection,
            skip_commands_registration,
            visibility_observer,
            height,
            styles,
            key_map,
        } = props;

        let items = items.ok_or(SelectListError::MissingProperty("items"))?;
        let element_for_item =
            element_for_item.ok_or(SelectListError::MissingProperty("element_for_item"))?;

        let mut list = Self {
            items,
            visible_items: Vec::new(),
            selection_index: None,
            element_for_item,
            max_results,
            filter,
            filter_key_for_item,
            filter_query,
            order,
            initial_selection_index,
            initially_visible_item_count,
            messages: Messages {
                empty: empty_message,
                error: error_message,
                info: info_message,
                loading: loading_message,
                loading_badge,
            },
            items_class_list,
            callbacks: Callbacks {
                did_change_query,
                did_change_selection,
                did_confirm_selection,
                did_confirm_empty_selection,
                did_cancel_selection,
            },
            skip_commands_registration,
            query_input: queryinput::new(),
            scorer: FuzzyScorer::new(),
            key_map,
            styles,
            rows: None,
            next_element_id: 0,
            visibility_observer: visibility_observer
                .unwrap_or_else(|| Box::new(ViewportObserver::new())),
            height,
            viewport_start: 0,
            did_click_items_list: false,
            frames: FrameClock::new(),
        };

        list.compute_items();
        let _ = list.request_render();
        log::debug!("created select list with {} items", list.items.len());
        Ok(list)
    }

    /// All candidate items, in the order they were supplied.
    pub fn items(&self) -> &[Arc<I>] {
        &self.items
    }

    /// Items currently shown, after filtering, ordering and truncation.
    pub fn visible_items(&self) -> &[Arc<I>] {
        &self.visible_items
    }

    /// Index of the selected visible item.
    pub fn selection_index(&self) -> Option<usize> {
        self.selection_index
    }

    /// The selected item, if any.
    pub fn selected_item(&self) -> Option<&Arc<I>> {
        self.selection_index.and_then(|i| self.visible_items.get(i))
    }

    /// The raw query text, before any `filter_query` transform.
    pub fn query(&self) -> String {
        self.query_input.value()
    }

    /// The query input, for hosts that want to tweak its prompt or styles.
    pub fn query_input(&self) -> &queryinput::Model {
        &self.query_input
    }

    /// Mutable access to the query input's presentation.
    ///
    /// Edits made to the value through this reference bypass the query-change
    /// path; use [`update`](Self::update) with a query to change the text.
    pub fn query_input_mut(&mut self) -> &mut queryinput::Model {
        &mut self.query_input
    }

    /// The key bindings in effect.
    pub fn key_map(&self) -> &SelectListKeyMap {
        &self.key_map
    }

    /// Replaces the key bindings.
    pub fn set_key_map(&mut self, key_map: SelectListKeyMap) {
        self.key_map = key_map;
    }

    /// The styles in effect.
    pub fn styles(&self) -> &SelectListStyles {
        &self.styles
    }

    /// Replaces the styles.
    pub fn set_styles(&mut self, styles: SelectListStyles) {
        self.styles = styles;
    }

    /// Tears the list down: stops visibility tracking and resolves every
    /// outstanding [`RenderHandle`](super::RenderHandle).
    pub fn destroy(self) {
        log::debug!("destroying select list");
    }

    pub(super) fn next_element_id(&mut self) -> ElementId {
        self.next_element_id += 1;
        ElementId::new(self.next_element_id)
    }
}

impl<I: Item> Drop for SelectList<I> {
    fn drop(&mut self) {
        self.visibility_observer.disconnect();
        self.frames.close();
    }
}

impl<I: Item> std::fmt::Debug for SelectList<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectList")
            .field("items", &self.items.len())
            .field("visible_items", &self.visible_items.len())
            .field("selection_index", &self.selection_index)
            .field("query", &self.query_input.value())
            .finish_non_exhaustive()
    }
}
