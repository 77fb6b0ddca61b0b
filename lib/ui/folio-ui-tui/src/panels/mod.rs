//! Panel rendering entry points.

mod footer;
mod header;
mod sheet;
mod tabs;

pub use footer::render_footer;
pub use header::render_header;
pub use sheet::{SheetTableState, TableOptions, render_sheet};
pub use tabs::render_tabs;
