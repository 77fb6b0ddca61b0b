//! Application construction and the initial activation.

use folio_domain::GeneratedReport;

use crate::panels::{SheetTableState, TableOptions};
use crate::state::UiState;

use super::navigation::{PANEL_ID_PREFIX, SheetPanel, SheetTab};
use super::{App, AppContext};

impl App {
    /// Build the tab/panel pairs from the report (one per sheet, in report
    /// order), set up the table widget, and activate the default selection.
    pub fn new(report: GeneratedReport, context: AppContext) -> Self {
        let tabs = report
            .sheets
            .iter()
            .enumerate()
            .map(|(index, sheet)| SheetTab {
                id: (index + 1).to_string(),
                label: sheet.name.clone(),
                panel_id: format!("{PANEL_ID_PREFIX}{}", sheet.name),
                active: false,
            })
            .collect::<Vec<_>>();
        let panels = report
            .sheets
            .iter()
            .map(|sheet| SheetPanel {
                id: format!("{PANEL_ID_PREFIX}{}", sheet.name),
                visible: false,
            })
            .collect::<Vec<_>>();

        // The table widget is configured once per launch; every sheet panel
        // shares the options but keeps its own scroll position.
        let table_options = TableOptions::new().scroll_x(true);
        let tables = report
            .sheets
            .iter()
            .map(|_| SheetTableState::new())
            .collect();

        let tab_count = tabs.len();
        let mut app = Self {
            report,
            context,
            tabs,
            panels,
            tables,
            table_options,
            should_quit: false,
            ui: UiState::new(tab_count),
        };
        tracing::info!(
            company = %app.report.company,
            sheets = app.report.sheets.len(),
            "report loaded"
        );
        app.activate_default();
        app
    }
}
