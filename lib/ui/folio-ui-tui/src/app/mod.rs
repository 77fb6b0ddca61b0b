//! TUI application state and event handling.
//!
//! # Examples
//! ```rust,no_run
//! use folio_domain::GeneratedReport;
//! use folio_ui_tui::app::{App, AppContext, DefaultSheet};
//!
//! let report = GeneratedReport::from_json_str(
//!     "acme",
//!     r#"{"Balance Sheet": {"2020": {"Assets": 100.0}}}"#,
//! )
//! .unwrap();
//! let context = AppContext::new(DefaultSheet::First);
//! let app = App::new(report, context);
//! assert!(app.visible_panel().is_some());
//! ```

mod core;
mod input;
mod keyboard;
mod lifecycle;
mod navigation;

#[doc(inline)]
pub use core::{App, AppContext};
#[doc(inline)]
pub use navigation::{DefaultSheet, PANEL_ID_PREFIX, SheetPanel, SheetTab};
