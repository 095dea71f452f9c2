//! Moving, confirming and cancelling the selection.

use super::frame::RenderHandle;
use super::model::SelectList;
use super::types::Item;
use crate::error::{Result, SelectListError};
use std::sync::Arc;

impl<I: Item> SelectList<I> {
    /// Selects the previous item, wrapping to the last one. Without a
    /// selection, selects the last item.
    pub fn select_previous(&mut self) -> RenderHandle {
        let index = match self.selection_index {
            Some(index) => index as isize - 1,
            None => self.visible_items.len() as isize - 1,
        };
        self.select_index(index)
    }

    /// Selects the next item, wrapping to the first one. Without a selection,
    /// selects the first item.
    pub fn select_next(&mut self) -> RenderHandle {
        let index = match self.selection_index {
            Some(index) => index as isize + 1,
            None => 0,
        };
        self.select_index(index)
    }

    /// Selects the first item.
    pub fn select_first(&mut self) -> RenderHandle {
        self.select_index(0)
    }

    /// Selects the last item.
    pub fn select_last(&mut self) -> RenderHandle {
        self.select_index(self.visible_items.len() as isize - 1)
    }

    /// Clears the selection. Fires no notification.
    pub fn select_none(&mut self) -> RenderHandle {
        if let Some(old) = self.selection_index.take() {
            self.patch_rows(&[old]);
        }
        self.request_render()
    }

    /// Selects the visible item at `index`.
    ///
    /// Indices past the end wrap to the first item and negative ones to the
    /// last. `did_change_selection` fires for every call, with `None` when the
    /// list is empty.
    pub fn select_index(&mut self, index: isize) -> RenderHandle {
        self.change_selection(index);
        self.request_render()
    }

    /// Selects `item`, looked up by identity among the visible items.
    ///
    /// # Errors
    ///
    /// [`SelectListError::ItemNotFound`] when `item` is not visible.
    pub fn select_item(&mut self, item: &Arc<I>) -> Result<RenderHandle> {
        let Some(index) = self
            .visible_items
            .iter()
            .position(|candidate| Arc::ptr_eq(candidate, item))
        else {
            log::warn!("select_item called with an item that is not visible");
            return Err(SelectListError::ItemNotFound);
        };
        Ok(self.select_index(index as isize))
    }

    /// Reports the selected item through `did_confirm_selection`, or calls
    /// `did_confirm_empty_selection` when nothing is selected.
    pub fn confirm_selection(&mut self) {
        match self.selected_item().cloned() {
            Some(item) => {
                if let Some(callback) = self.callbacks.did_confirm_selection.as_mut() {
                    callback(&item);
                }
            }
            None => {
                if let Some(callback) = self.callbacks.did_confirm_empty_selection.as_mut() {
                    callback();
                }
            }
        }
    }

    /// Calls `did_cancel_selection`.
    pub fn cancel_selection(&mut self) {
        if let Some(callback) = self.callbacks.did_cancel_selection.as_mut() {
            callback();
        }
    }

    /// Wraps `index` into range, stores it and notifies. Rows are patched in
    /// place when a rendering is cached.
    pub(super) fn change_selection(&mut self, index: isize) {
        let len = self.visible_items.len() as isize;
        let index = if index >= len {
            0
        } else if index < 0 {
            len - 1
        } else {
            index
        };
        let new = usize::try_from(index).ok().filter(|i| *i < self.visible_items.len());

        let old = std::mem::replace(&mut self.selection_index, new);
        self.scroll_selection_into_view();
        match (old, new) {
            (Some(old), Some(new)) if old != new => self.patch_rows(&[old, new]),
            (Some(index), _) | (None, Some(index)) => self.patch_rows(&[index]),
            (None, None) => {}
        }

        let selected = new.and_then(|i| self.visible_items.get(i)).cloned();
        if let Some(callback) = self.callbacks.did_change_selection.as_mut() {
            callback(selected.as_ref());
        }
    }
}
