//! Top-level frame layout: header, selector tabs, sheet body, footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::panels::{render_footer, render_header, render_sheet, render_tabs};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    render_sheet(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);
}

#[cfg(test)]
mod tests {
    use folio_domain::GeneratedReport;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::render;
    use crate::app::{App, AppContext, DefaultSheet};

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        let report = GeneratedReport::from_json_str(
            "acme",
            r#"{
                "Balance Sheet": {"2020": {"Total Assets": 1500.0}},
                "Income Statement": {"2020": {"Revenue": 900.0}}
            }"#,
        )
        .unwrap();
        App::new(report, AppContext::new(DefaultSheet::First))
    }

    #[test]
    fn renders_the_visible_sheet_only() {
        let mut app = app();
        let screen = draw(&mut app);
        assert!(screen.contains("acme"));
        assert!(screen.contains("Total Assets"));
        assert!(screen.contains("1,500"));
        assert!(!screen.contains("Revenue"));
    }

    #[test]
    fn switching_tabs_swaps_the_rendered_table() {
        let mut app = app();
        draw(&mut app);
        app.activate_tab(1);
        let screen = draw(&mut app);
        assert!(screen.contains("Revenue"));
        assert!(!screen.contains("Total Assets"));
    }

    #[test]
    fn render_records_tab_click_areas() {
        let mut app = app();
        draw(&mut app);
        assert!(app.ui.tab_areas.iter().all(|area| area.width > 0));
        let screen = draw(&mut app);
        assert!(screen.contains("Balance Sheet"));
        assert!(screen.contains("Income Statement"));
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let report = GeneratedReport::from_json_str("acme", "{}").unwrap();
        let mut app = App::new(report, AppContext::new(DefaultSheet::First));
        let screen = draw(&mut app);
        assert!(screen.contains("No sheet to display"));
    }
}
