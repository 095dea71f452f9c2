//! Turning list state into rows, regions and the terminal frame.
//!
//! Rows are cached between operations. A recompute or an update drops the
//! cache and the next render rebuilds every row through `element_for_item`;
//! selection moves and visibility reports replace single rows in place.

use super::element::{ElementId, ListItem, LIST_GROUP_CLASS};
use super::frame::RenderHandle;
use super::model::SelectList;
use super::style::SELECTED_MARKER;
use super::types::{Item, ItemRenderOptions};
use std::ops::Range;
use std::sync::Arc;

/// One part of the list's layout, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region<'a> {
    /// The query input.
    QueryInput,
    /// Loading message with its optional badge.
    LoadingMessage {
        /// Message text.
        message: &'a str,
        /// Badge text, if any.
        badge: Option<&'a str>,
    },
    /// Informational message.
    InfoMessage(&'a str),
    /// Error message.
    ErrorMessage(&'a str),
    /// The rows container.
    Items {
        /// `list-group` followed by the configured extra classes.
        class_list: Vec<&'a str>,
        /// Every row, including those outside the viewport.
        rows: &'a [ListItem],
    },
    /// Shown instead of the rows when nothing matches and nothing is loading.
    EmptyMessage(&'a str),
}

impl<I: Item> SelectList<I> {
    /// The rendered rows, one per visible item.
    pub fn rows(&self) -> &[ListItem] {
        self.rows.as_deref().unwrap_or(&[])
    }

    /// The visible item a row element was rendered for.
    ///
    /// Returns `None` for ids of replaced rows and ids from other lists.
    pub fn item_for_element(&self, element: ElementId) -> Option<&Arc<I>> {
        self.row_index_of(element)
            .and_then(|index| self.visible_items.get(index))
    }

    /// The layout regions in display order.
    pub fn regions(&self) -> Vec<Region<'_>> {
        let mut regions = vec![Region::QueryInput];

        let loading = present(&self.messages.loading);
        if let Some(message) = loading {
            regions.push(Region::LoadingMessage {
                message,
                badge: present(&self.messages.loading_badge),
            });
        }
        if let Some(message) = present(&self.messages.info) {
            regions.push(Region::InfoMessage(message));
        }
        if let Some(message) = present(&self.messages.error) {
            regions.push(Region::ErrorMessage(message));
        }

        if !self.visible_items.is_empty() {
            let class_list = std::iter::once(LIST_GROUP_CLASS)
                .chain(self.items_class_list.iter().map(String::as_str))
                .collect();
            regions.push(Region::Items {
                class_list,
                rows: self.rows(),
            });
        } else if loading.is_none() {
            if let Some(message) = present(&self.messages.empty) {
                regions.push(Region::EmptyMessage(message));
            }
        }

        regions
    }

    /// Renders the frame and marks it applied, resolving pending
    /// [`RenderHandle`]s.
    pub fn view(&self) -> String {
        let mut lines = Vec::new();

        for region in self.regions() {
            match region {
                Region::QueryInput => lines.push(self.query_input.view()),
                Region::LoadingMessage { message, badge } => {
                    let mut line = self.styles.loading_message.render(message);
                    if let Some(badge) = badge {
                        line.push(' ');
                        line.push_str(&self.styles.loading_badge.render(badge));
                    }
                    lines.push(line);
                }
                Region::InfoMessage(message) => {
                    lines.push(self.styles.info_message.render(message));
                }
                Region::ErrorMessage(message) => {
                    lines.push(self.styles.error_message.render(message));
                }
                Region::Items { rows, .. } => {
                    let window = self.viewport();
                    for row in &rows[window] {
                        lines.push(self.render_row(row));
                    }
                }
                Region::EmptyMessage(message) => {
                    lines.push(self.styles.empty_message.render(message));
                }
            }
        }

        self.frames.apply();
        lines.join("\n")
    }

    /// Number of rows shown at once; `None` shows every row.
    pub fn height(&self) -> Option<usize> {
        self.height
    }

    /// Changes the number of rows shown at once.
    pub fn set_height(&mut self, height: Option<usize>) -> RenderHandle {
        self.height = height;
        self.request_render()
    }

    /// Range of row indices inside the viewport.
    pub fn viewport(&self) -> Range<usize> {
        let len = self.rows().len();
        match self.height {
            Some(height) => {
                let start = self.viewport_start.min(len);
                start..(start + height).min(len)
            }
            None => 0..len,
        }
    }

    /// Scrolls so that row `start` is at the top of the viewport.
    pub fn scroll_to(&mut self, start: usize) -> RenderHandle {
        self.viewport_start = start;
        self.clamp_viewport();
        self.request_render()
    }

    fn render_row(&self, row: &ListItem) -> String {
        let content = row.element().content();
        if row.selected() {
            self.styles
                .selected_item
                .render(&format!("{SELECTED_MARKER} {content}"))
        } else {
            self.styles.item.render(content)
        }
    }

    /// Finishes an operation: renders what is pending and applies visibility
    /// reports for the current viewport.
    pub(super) fn request_render(&mut self) -> RenderHandle {
        if self.rows.is_none() {
            self.render_items();
        }
        self.clamp_viewport();
        self.poll_visibility();
        self.frames.next_frame()
    }

    /// Drops the cached rows and stops tracking their visibility.
    pub(super) fn invalidate_rows(&mut self) {
        self.rows = None;
        self.visibility_observer.disconnect();
    }

    /// Renders every row, then starts observing those past the initially
    /// visible ones.
    pub(super) fn render_items(&mut self) {
        let count = self.initially_visible_item_count.filter(|count| *count > 0);
        let mut rows = Vec::with_capacity(self.visible_items.len());
        for index in 0..self.visible_items.len() {
            let visible = count.map_or(true, |count| index < count);
            if let Some(row) = self.build_row(index, visible) {
                rows.push(row);
            }
        }

        if let Some(count) = count {
            for (index, row) in rows.iter().enumerate().skip(count) {
                self.visibility_observer.observe(row.id(), index);
            }
        }
        self.rows = Some(rows);
    }

    /// Re-renders a single cached row as visible.
    pub(super) fn render_item_at_index(&mut self, index: usize) {
        let Some(old) = self.rows().get(index).map(ListItem::id) else {
            return;
        };
        self.visibility_observer.unobserve(old);
        let Some(row) = self.build_row(index, true) else {
            return;
        };
        log::trace!("re-rendered row {index} as {:?}", row.id());
        if let Some(slot) = self.rows.as_mut().and_then(|rows| rows.get_mut(index)) {
            *slot = row;
        }
    }

    /// Re-renders the given rows if a rendering is cached. Without one, the
    /// pending full render covers them.
    pub(super) fn patch_rows(&mut self, indices: &[usize]) {
        if self.rows.is_none() {
            return;
        }
        for &index in indices {
            self.render_item_at_index(index);
        }
    }

    pub(super) fn row_index_of(&self, element: ElementId) -> Option<usize> {
        self.rows().iter().position(|row| row.id() == element)
    }

    fn build_row(&mut self, index: usize, visible: bool) -> Option<ListItem> {
        let item = Arc::clone(self.visible_items.get(index)?);
        let selected = self.selection_index == Some(index);
        let element = (self.element_for_item)(
            &*item,
            ItemRenderOptions {
                selected,
                index,
                visible,
            },
        );
        let id = self.next_element_id();
        Some(ListItem::new(id, element, selected))
    }

    /// Scrolls the least amount needed to show the selected row.
    pub(super) fn scroll_selection_into_view(&mut self) {
        let Some(height) = self.height.filter(|height| *height > 0) else {
            self.clamp_viewport();
            return;
        };
        if let Some(selected) = self.selection_index {
            if selected < self.viewport_start {
                self.viewport_start = selected;
            } else if selected >= self.viewport_start + height {
                self.viewport_start = selected + 1 - height;
            }
        }
        self.clamp_viewport();
    }

    fn clamp_viewport(&mut self) {
        let len = self.visible_items.len();
        let max_start = match self.height {
            Some(height) => len.saturating_sub(height),
            None => 0,
        };
        self.viewport_start = self.viewport_start.min(max_start);
    }
}

/// A configured message, with an empty string counting as unset.
fn present(message: &Option<String>) -> Option<&str> {
    message.as_deref().filter(|message| !message.is_empty())
}
