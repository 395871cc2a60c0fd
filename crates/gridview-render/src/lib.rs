//! Plain-text rendering for gridview.
//!
//! [`TextRenderer`] draws a [`gridview::DerivedView`] the way a data table
//! screen lays it out:
//!
//! ```text
//! Show: 8  Search: kumar
//! ┌────┬──────────────┬──────────┐
//! │ SN │ Full Name ▲  │ Division │
//! ├────┼──────────────┼──────────┤
//! │  1 │ Anil Kumar   │ Finance  │
//! │  2 │ Sita Kumari  │ Audit    │
//! └────┴──────────────┴──────────┘
//! Showing 1 to 2 of 2 entries
//! Prev [1] Next
//! ```
//!
//! Rows with nested data get their inner table indented below them. When
//! nothing is visible the body is a single row holding
//! [`RenderOptions::no_records_message`].

mod border;
mod options;
mod render;
mod text;

pub use border::BorderStyle;
pub use options::{RenderOptions, NO_RECORDS_MESSAGE};
pub use render::TextRenderer;
pub use text::{display_width, fit, pad, truncate_to_width};
