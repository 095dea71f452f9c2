//! Deriving the visible items from the items and the query.

use super::model::SelectList;
use super::types::Item;
use std::sync::Arc;

impl<I: Item> SelectList<I> {
    /// The query handed to the filter: the raw text passed through
    /// `filter_query` when one is configured.
    pub fn filter_query(&self) -> String {
        let raw = self.query_input.value();
        match &self.filter_query {
            Some(transform) => transform(&raw),
            None => raw,
        }
    }

    /// Runs when the query text changed: notifies, then recomputes.
    pub(super) fn did_change_query(&mut self) {
        let query = self.filter_query();
        if let Some(callback) = self.callbacks.did_change_query.as_mut() {
            callback(&query);
        }
        self.compute_items();
    }

    /// Filters, orders and truncates the items, then selects the initial index.
    ///
    /// Drops the rendered rows and stops visibility tracking first so that
    /// reports about old rows cannot reach the new ones.
    pub(super) fn compute_items(&mut self) {
        self.invalidate_rows();

        let query = self.filter_query();
        let mut visible = match &self.filter {
            Some(filter) => filter(self.items.clone(), &query),
            None => self.fuzzy_filter(&query),
        };
        if let Some(order) = &self.order {
            visible.sort_by(|a, b| order(a, b));
        }
        if let Some(max) = self.max_results.filter(|max| *max > 0) {
            visible.truncate(max);
        }

        log::debug!(
            "filtered {} items down to {} for query {:?}",
            self.items.len(),
            visible.len(),
            query
        );
        self.visible_items = visible;
        self.selection_index = None;
        self.viewport_start = 0;

        if let Some(index) = self.initial_selection_index {
            self.change_selection(isize::try_from(index).unwrap_or(isize::MAX));
        }
    }

    /// Keeps items scoring above zero, best first. Equal scores keep their
    /// original relative order.
    fn fuzzy_filter(&self, query: &str) -> Vec<Arc<I>> {
        if query.is_empty() {
            return self.items.clone();
        }

        let mut scored: Vec<(f64, &Arc<I>)> = self
            .items
            .iter()
            .filter_map(|item| {
                let score = match &self.filter_key_for_item {
                    Some(key_for) => self.scorer.score(&key_for(item.as_ref()), query),
                    None => self.scorer.score(&item.filter_value(), query),
                };
                (score > 0.0).then_some((score, item))
            })
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().map(|(_, item)| Arc::clone(item)).collect()
    }
}
