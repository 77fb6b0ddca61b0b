use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut hints = String::from(" q quit │ Tab/1-9 switch sheet │ ↑↓ rows");
    if app.table_options.scroll_x {
        hints.push_str(" │ ←→ columns");
    }
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
