use folio_domain::{GeneratedReport, Sheet};

use crate::panels::{SheetTableState, TableOptions};
use crate::state::UiState;

use super::navigation::{DefaultSheet, SheetPanel, SheetTab};

/// Launch-time configuration injected by the binary.
pub struct AppContext {
    pub default_sheet: DefaultSheet,
}

impl AppContext {
    pub fn new(default_sheet: DefaultSheet) -> Self {
        Self { default_sheet }
    }
}

/// Whole-application state. Owns the selector tabs, the sheet panels and the
/// per-panel table scroll state; rendering is a projection of this struct.
pub struct App {
    pub report: GeneratedReport,
    pub context: AppContext,
    pub tabs: Vec<SheetTab>,
    pub panels: Vec<SheetPanel>,
    /// One table state per panel, index-aligned with `panels`.
    pub tables: Vec<SheetTableState>,
    pub table_options: TableOptions,
    pub should_quit: bool,
    pub ui: UiState,
}

impl App {
    /// The sheet backing a panel, index-aligned with `panels`.
    pub fn sheet_at(&self, panel_index: usize) -> Option<&Sheet> {
        self.report.sheets.get(panel_index)
    }
}
