//! Terminal UI for browsing the sheets of a generated report.
//!
//! The tab row across the top is the selector-button group; the body shows
//! the one panel whose id matches the active tab. Table scrolling inside a
//! panel is handled by the sheet table widget.

pub mod app;
pub mod panels;
pub(crate) mod render;
mod runner;
pub mod state;

pub use runner::start;
