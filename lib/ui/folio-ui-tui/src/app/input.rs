//! Mouse-driven event handling for the TUI.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::App;

impl App {
    /// Handle a mouse event from crossterm. Tab clicks are resolved against
    /// the click areas recorded by the previous render.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_tab_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollUp => self.scroll_active_rows(-1),
            MouseEventKind::ScrollDown => self.scroll_active_rows(1),
            MouseEventKind::ScrollLeft => self.scroll_active_columns(-1),
            MouseEventKind::ScrollRight => self.scroll_active_columns(1),
            _ => {}
        }
        Ok(())
    }

    fn handle_tab_click(&mut self, column: u16, row: u16) -> bool {
        let pos = (column, row).into();
        if !self.ui.tab_bar_area.contains(pos) {
            return false;
        }
        for (index, area) in self.ui.tab_areas.iter().enumerate() {
            if area.contains(pos) {
                self.activate_tab(index);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use folio_domain::GeneratedReport;
    use ratatui::layout::Rect;

    use crate::app::{App, AppContext, DefaultSheet};

    fn app() -> App {
        let report = GeneratedReport::from_json_str(
            "acme",
            r#"{
                "Balance Sheet": {"2020": {"Assets": 100.0}},
                "Income Statement": {"2020": {"Revenue": 50.0}}
            }"#,
        )
        .unwrap();
        App::new(report, AppContext::new(DefaultSheet::First))
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn click_inside_a_tab_area_activates_it() {
        let mut app = app();
        app.ui.tab_bar_area = Rect::new(0, 1, 40, 1);
        app.ui.tab_areas[0] = Rect::new(0, 1, 10, 1);
        app.ui.tab_areas[1] = Rect::new(10, 1, 10, 1);
        app.handle_mouse_event(click(12, 1)).unwrap();
        assert_eq!(app.active_tab_index(), Some(1));
        assert_eq!(app.visible_panel().unwrap().id, "sheet-Income Statement");
    }

    #[test]
    fn click_outside_every_tab_changes_nothing() {
        let mut app = app();
        app.ui.tab_bar_area = Rect::new(0, 1, 40, 1);
        app.ui.tab_areas[0] = Rect::new(0, 1, 10, 1);
        app.ui.tab_areas[1] = Rect::new(10, 1, 10, 1);
        app.handle_mouse_event(click(5, 20)).unwrap();
        assert_eq!(app.active_tab_index(), Some(0));
    }
}
