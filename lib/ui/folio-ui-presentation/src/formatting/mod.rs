//! Shared formatting helpers used by the TUI.

mod cells;

pub use cells::{column_width, format_cell, group_thousands, truncate};
