//! Applying partial updates.

use super::frame::RenderHandle;
use super::model::SelectList;
use super::props::SelectListUpdate;
use super::types::Item;

impl<I: Item> SelectList<I> {
    /// Applies the fields set on `update` and re-renders every row.
    ///
    /// Changing `items`, `max_results`, `filter` or `filter_query` recomputes
    /// the visible items. A `query` that differs from the current text runs the
    /// same path as typing (`did_change_query` first, then the recompute), so
    /// the items are not computed a second time. Everything else only affects
    /// presentation or the next recompute.
    ///
    /// An empty update fires no callbacks and just refreshes the rows.
    pub fn update(&mut self, update: SelectListUpdate<I>) -> RenderHandle {
        let SelectListUpdate {
            items,
            element_for_item,
            max_results,
            filter,
            filter_key_for_item,
            filter_query,
            order,
            query,
            select_query,
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
        } = update;

        let mut should_compute_items = false;

        if let Some(items) = items {
            self.items = items;
            should_compute_items = true;
        }
        if let Some(max_results) = max_results {
            self.max_results = max_results;
            should_compute_items = true;
        }
        if let Some(filter) = filter {
            self.filter = filter;
            should_compute_items = true;
        }
        if let Some(filter_query) = filter_query {
            self.filter_query = filter_query;
            should_compute_items = true;
        }

        if let Some(element_for_item) = element_for_item {
            self.element_for_item = element_for_item;
        }
        if let Some(filter_key_for_item) = filter_key_for_item {
            self.filter_key_for_item = filter_key_for_item;
        }
        if let Some(order) = order {
            self.order = order;
        }
        if let Some(index) = initial_selection_index {
            self.initial_selection_index = index;
        }
        if let Some(count) = initially_visible_item_count {
            self.initially_visible_item_count = count;
        }

        if let Some(message) = empty_message {
            self.messages.empty = message;
        }
        if let Some(message) = error_message {
            self.messages.error = message;
        }
        if let Some(message) = info_message {
            self.messages.info = message;
        }
        if let Some(message) = loading_message {
            self.messages.loading = message;
        }
        if let Some(badge) = loading_badge {
            self.messages.loading_badge = badge;
        }
        if let Some(classes) = items_class_list {
            self.items_class_list = classes;
        }

        if let Some(callback) = did_change_query {
            self.callbacks.did_change_query = callback;
        }
        if let Some(callback) = did_change_selection {
            self.callbacks.did_change_selection = callback;
        }
        if let Some(callback) = did_confirm_selection {
            self.callbacks.did_confirm_selection = callback;
        }
        if let Some(callback) = did_confirm_empty_selection {
            self.callbacks.did_confirm_empty_selection = callback;
        }
        if let Some(callback) = did_cancel_selection {
            self.callbacks.did_cancel_selection = callback;
        }

        if let Some(query) = query {
            if self.query_input.set_value(&query) {
                self.did_change_query();
                should_compute_items = false;
            }
        }
        match select_query {
            Some(true) => self.query_input.select_all(),
            Some(false) => self.query_input.clear_selection(),
            None => {}
        }

        if should_compute_items {
            self.compute_items();
        }
        self.invalidate_rows();
        self.request_render()
    }
}
