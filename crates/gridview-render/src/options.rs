//! Renderer configuration.

use serde::{Deserialize, Serialize};

use crate::border::BorderStyle;

/// Message shown in place of the body when no row is visible.
pub const NO_RECORDS_MESSAGE: &str = "There are no records to display";

/// Options for [`TextRenderer`](crate::TextRenderer).
///
/// ```
/// use gridview_render::{BorderStyle, RenderOptions};
///
/// let options: RenderOptions = serde_json::from_str(r#"{ "border": "ascii" }"#).unwrap();
/// assert_eq!(options.border, BorderStyle::Ascii);
/// assert_eq!(options.max_column_width, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Border style.
    pub border: BorderStyle,
    /// Text of the "no records" row.
    pub no_records_message: String,
    /// Widest a column may grow when it has no preferred width.
    pub max_column_width: usize,
    /// Whether to print the page size and filter line above the table.
    pub show_toolbar: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            border: BorderStyle::default(),
            no_records_message: NO_RECORDS_MESSAGE.to_string(),
            max_column_width: 40,
            show_toolbar: true,
        }
    }
}

impl RenderOptions {
    /// Sets the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Sets the "no records" message.
    pub fn no_records_message(mut self, message: impl Into<String>) -> Self {
        self.no_records_message = message.into();
        self
    }

    /// Sets the column width cap.
    pub fn max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Shows or hides the toolbar.
    pub fn show_toolbar(mut self, show: bool) -> Self {
        self.show_toolbar = show;
        self
    }
}
