//! Styles for the parts of a select list frame.
//!
//! ```rust
//! use bubbletea_select_list::select_list::SelectListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = SelectListStyles::default();
//! styles.selected_item = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Marker drawn in front of the selected row.
pub const SELECTED_MARKER: &str = "›";

/// Styling for every region the list draws.
#[derive(Debug, Clone)]
pub struct SelectListStyles {
    /// Rows that are not selected.
    pub item: Style,
    /// The selected row.
    pub selected_item: Style,
    /// Loading message.
    pub loading_message: Style,
    /// Badge after the loading message.
    pub loading_badge: Style,
    /// Info message.
    pub info_message: Style,
    /// Error message.
    pub error_message: Style,
    /// Empty message.
    pub empty_message: Style,
}

impl Default for SelectListStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        };

        Self {
            item: Style::new().padding_left(2),
            selected_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            loading_message: Style::new().foreground(subdued.clone()),
            loading_badge: Style::new()
                .foreground(Color::from("#FFFDF5"))
                .background(Color::from("#6124DF"))
                .padding(0, 1, 0, 1),
            info_message: Style::new().foreground(subdued.clone()),
            error_message: Style::new().foreground(AdaptiveColor {
                Light: "#D70000",
                Dark: "#FF5F5F",
            }),
            empty_message: Style::new().foreground(subdued),
        }
    }
}
