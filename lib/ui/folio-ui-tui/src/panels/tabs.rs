//! The selector-tab row across the top of the screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use folio_ui_presentation::formatting;

use crate::app::App;

const MAX_TAB_LABEL: usize = 24;

pub fn render_tabs(f: &mut Frame, area: Rect, app: &mut App) {
    app.ui.tab_bar_area = area;
    for slot in app.ui.tab_areas.iter_mut() {
        *slot = Rect::default();
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.tabs.is_empty() {
        f.render_widget(
            Paragraph::new("No sheets in report").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let mut constraints: Vec<Constraint> = app
        .tabs
        .iter()
        .map(|tab| {
            let label = formatting::truncate(&tab.label, MAX_TAB_LABEL);
            Constraint::Length(label.chars().count() as u16 + 4)
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (index, chunk) in chunks.iter().take(app.tabs.len()).enumerate() {
        if index < app.ui.tab_areas.len() {
            app.ui.tab_areas[index] = *chunk;
        }
        render_tab(f, *chunk, app, index);
    }
}

fn render_tab(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let tab = &app.tabs[index];
    let label = formatting::truncate(&tab.label, MAX_TAB_LABEL);
    let style = if tab.active {
        Style::default()
            .fg(Color::Cyan)
            .bg(Color::Rgb(0, 70, 80))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = Line::from(vec![
        Span::styled(format!("{} ", tab.id), style.add_modifier(Modifier::DIM)),
        Span::styled(label, style),
    ]);
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
