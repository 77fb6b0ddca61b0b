//! Keyboard-driven event handling for the TUI.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App {
    /// Handle a keyboard event from crossterm.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Char(']') => self.next_tab(),
            KeyCode::BackTab | KeyCode::Char('[') => self.prev_tab(),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < self.tabs.len() {
                    self.activate_tab(index);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.scroll_active_columns(-1),
            KeyCode::Right | KeyCode::Char('l') => self.scroll_active_columns(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_active_rows(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_active_rows(1),
            KeyCode::PageUp => self.scroll_active_rows(-(self.sheet_page_rows())),
            KeyCode::PageDown => self.scroll_active_rows(self.sheet_page_rows()),
            KeyCode::Home => self.reset_active_scroll(),
            _ => {}
        }
        Ok(())
    }

    fn sheet_page_rows(&self) -> i32 {
        i32::from(self.ui.sheet_area.height.saturating_sub(3)).max(1)
    }

    pub(crate) fn scroll_active_rows(&mut self, delta: i32) {
        let Some(index) = self.visible_panel_index() else {
            return;
        };
        let row_count = self.sheet_at(index).map(|s| s.row_count()).unwrap_or(0);
        self.tables[index].scroll_rows(delta, row_count);
    }

    pub(crate) fn scroll_active_columns(&mut self, delta: i32) {
        if !self.table_options.scroll_x {
            return;
        }
        let Some(index) = self.visible_panel_index() else {
            return;
        };
        let column_count = self.sheet_at(index).map(|s| s.column_count()).unwrap_or(0);
        self.tables[index].scroll_columns(delta, column_count);
    }

    fn reset_active_scroll(&mut self) {
        if let Some(index) = self.visible_panel_index() {
            self.tables[index].reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};
    use folio_domain::GeneratedReport;

    use crate::app::{App, AppContext, DefaultSheet};

    const WIDE_SHEET: &str = r#"{
        "Wide": {
            "2017": {"a": 1.0, "b": 2.0, "c": 3.0},
            "2018": {"a": 1.0},
            "2019": {"a": 1.0},
            "2020": {"a": 1.0}
        },
        "Narrow": {"2020": {"x": 9.0}}
    }"#;

    fn app() -> App {
        let report = GeneratedReport::from_json_str("acme", WIDE_SHEET).unwrap();
        App::new(report, AppContext::new(DefaultSheet::First))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code)).unwrap();
    }

    #[test]
    fn q_and_esc_request_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_and_digits_switch_sheets() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab_index(), Some(1));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_tab_index(), Some(0));
        // Digit beyond the tab count is ignored.
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.active_tab_index(), Some(0));
    }

    #[test]
    fn horizontal_scroll_moves_the_active_table_only() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.tables[0].col_offset, 2);
        assert_eq!(app.tables[1].col_offset, 0);
        // The last column stays reachable but the offset never passes it.
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.tables[0].col_offset, 3);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tables[0].col_offset, 2);
    }

    #[test]
    fn scroll_positions_survive_tab_switches() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tables[0].col_offset, 1);
        assert_eq!(app.tables[0].row_offset, 1);
    }

    #[test]
    fn home_resets_scroll() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.tables[0].col_offset, 0);
        assert_eq!(app.tables[0].row_offset, 0);
    }
}
