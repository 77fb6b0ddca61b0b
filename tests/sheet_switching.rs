//! End-to-end flow: load a report file, build the app, switch sheets.

use std::io::Write;

use folio_domain::{CellValue, GeneratedReport};
use folio_ui_presentation::formatting;
use folio_ui_tui::app::{App, AppContext, DefaultSheet};

const REPORT: &str = r#"{
    "Balance Sheet": {
        "2019": {"Total Assets": 1500.0, "Total Debt": 400.0},
        "2020": {"Total Assets": 1710.0, "Total Debt": 380.0}
    },
    "Income Statement": {
        "2019": {"Revenue": 900.0},
        "2020": {"Revenue": 1050.25}
    },
    "Cash Flow": {
        "2020": {"Operating": 120.0}
    }
}"#;

fn load_report() -> GeneratedReport {
    let mut file = tempfile::Builder::new()
        .prefix("acme-10K")
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(REPORT.as_bytes()).unwrap();
    GeneratedReport::load_from_path(file.path()).unwrap()
}

#[test]
fn loaded_report_drives_the_panel_group() {
    let report = load_report();
    assert!(report.company.starts_with("acme-10K"));

    let mut app = App::new(report, AppContext::new(DefaultSheet::First));
    assert_eq!(app.tabs.len(), 3);
    assert_eq!(app.visible_panel().unwrap().id, "sheet-Balance Sheet");

    app.activate_tab(2);
    assert_eq!(app.visible_panel().unwrap().id, "sheet-Cash Flow");
    assert_eq!(app.tabs.iter().filter(|t| t.active).count(), 1);
}

#[test]
fn default_sheet_flag_selects_by_name() {
    let report = load_report();
    let app = App::new(
        report,
        AppContext::new(DefaultSheet::ByName("Income Statement".into())),
    );
    assert_eq!(app.visible_panel().unwrap().id, "sheet-Income Statement");
}

#[test]
fn cells_format_for_display() {
    let report = load_report();
    let income = &report.sheets[1];
    assert_eq!(
        formatting::format_cell(&income.rows[0][1]),
        "1,050.25"
    );
    assert_eq!(income.rows[0][0], CellValue::Number(900.0));
}
