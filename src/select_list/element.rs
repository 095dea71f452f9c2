//! Row elements produced by the element renderer.

use lipgloss_extras::lipgloss::strip_ansi;

/// Class carried by the element of the selected row.
pub const SELECTED_CLASS: &str = "selected";

/// Class of the container holding the rows.
pub const LIST_GROUP_CLASS: &str = "list-group";

/// Opaque identity of a rendered row element.
///
/// Every call of the element renderer yields a new id, so an id addresses one
/// particular rendering of a row. Ids from earlier renderings, or from other
/// lists, are simply unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The numeric value of the id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Content of a row plus the class names attached to it.
///
/// ```
/// use bubbletea_select_list::select_list::Element;
///
/// let el = Element::new("Grace").with_class("item");
/// assert!(el.has_class("item"));
/// assert_eq!(el.text_content(), "Grace");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    content: String,
    class_list: Vec<String>,
}

impl Element {
    /// Creates an element showing `content`, which may contain ANSI styling.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            class_list: Vec::new(),
        }
    }

    /// Adds a class and returns the element, for chaining.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Adds a class unless already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.class_list.push(class);
        }
    }

    /// Removes a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.class_list.retain(|c| c != class);
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c == class)
    }

    /// All classes in insertion order.
    pub fn class_list(&self) -> &[String] {
        &self.class_list
    }

    /// Raw content, styling included.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Content with ANSI styling removed.
    pub fn text_content(&self) -> String {
        strip_ansi(&self.content)
    }
}

/// A rendered row: the element plus its identity and selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    id: ElementId,
    element: Element,
    selected: bool,
}

impl ListItem {
    pub(crate) fn new(id: ElementId, mut element: Element, selected: bool) -> Self {
        if selected {
            element.add_class(SELECTED_CLASS);
        }
        Self {
            id,
            element,
            selected,
        }
    }

    /// Identity of the row element.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The rendered element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Whether the row is the selected one.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Row text with styling removed.
    pub fn text_content(&self) -> String {
        self.element.text_content()
    }
}
