//! Core traits and function types for select list components.

use super::element::Element;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

/// Trait for values that can be shown in a select list.
///
/// The default fuzzy filter scores `filter_value()` against the query unless a
/// `filter_key_for_item` function is configured. Structured records that are
/// always filtered through a key function or a custom filter can rely on the
/// default implementation, which never matches a non-empty query.
///
/// # Examples
///
/// ```
/// use bubbletea_select_list::select_list::Item;
/// use std::borrow::Cow;
///
/// struct Symbol {
///     name: String,
///     line: u32,
/// }
///
/// impl Item for Symbol {
///     fn filter_value(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.name)
///     }
/// }
/// ```
pub trait Item: Send + Sync + 'static {
    /// Text the default filter matches the query against.
    fn filter_value(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

impl Item for String {
    fn filter_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Item for &'static str {
    fn filter_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

macro_rules! impl_item_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Item for $t {
                fn filter_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_item_via_display!(char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Per-row information passed to the element renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRenderOptions {
    /// Whether this row holds the selected item.
    pub selected: bool,
    /// Position of the row among the visible items.
    pub index: usize,
    /// `false` while the row has not yet been scrolled into view. Always `true`
    /// unless `initially_visible_item_count` is configured.
    pub visible: bool,
}

/// Renders one item into a row element.
pub type ElementForItem<I> = Box<dyn Fn(&I, ItemRenderOptions) -> Element + Send>;
/// Replaces the default fuzzy filter: receives a copy of all items and the query.
pub type FilterFn<I> = Box<dyn Fn(Vec<Arc<I>>, &str) -> Vec<Arc<I>> + Send>;
/// Extracts the text the default filter scores.
pub type FilterKeyFn<I> = Box<dyn Fn(&I) -> String + Send>;
/// Transforms the raw query before it reaches the filter.
pub type QueryTransformFn = Box<dyn Fn(&str) -> String + Send>;
/// Orders filtered items.
pub type OrderFn<I> = Box<dyn Fn(&I, &I) -> Ordering + Send>;

/// Called with the effective query whenever the query text changes.
pub type QueryCallback = Box<dyn FnMut(&str) + Send>;
/// Called with the newly selected item, or `None` when nothing could be selected.
pub type SelectionCallback<I> = Box<dyn FnMut(Option<&Arc<I>>) + Send>;
/// Called with the item the user confirmed.
pub type ConfirmCallback<I> = Box<dyn FnMut(&Arc<I>) + Send>;
/// Called without arguments (empty confirmation, cancellation).
pub type Callback = Box<dyn FnMut() + Send>;
