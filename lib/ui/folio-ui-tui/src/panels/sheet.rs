//! The sheet table widget: projects one sheet onto a scrollable table.
//!
//! Vertical position is a plain row offset; horizontal position is the index
//! of the first data column shown, active only when `TableOptions::scroll_x`
//! was enabled at construction. The row-label column is always pinned.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{
        Block, Borders, Cell, Padding, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
};

use folio_domain::Sheet;
use folio_ui_presentation::formatting;

use crate::app::App;

const MIN_COLUMN_WIDTH: u16 = 8;
const MAX_COLUMN_WIDTH: u16 = 28;
const LABEL_COLUMN_MAX: u16 = 40;

/// Widget configuration, fixed at launch.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub scroll_x: bool,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_x(mut self, enabled: bool) -> Self {
        self.scroll_x = enabled;
        self
    }
}

/// Per-panel scroll position.
#[derive(Clone, Copy, Debug, Default)]
pub struct SheetTableState {
    pub row_offset: usize,
    pub col_offset: usize,
}

impl SheetTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_rows(&mut self, delta: i32, row_count: usize) {
        let max = row_count.saturating_sub(1);
        self.row_offset = step(self.row_offset, delta).min(max);
    }

    pub fn scroll_columns(&mut self, delta: i32, column_count: usize) {
        let max = column_count.saturating_sub(1);
        self.col_offset = step(self.col_offset, delta).min(max);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn step(offset: usize, delta: i32) -> usize {
    if delta.is_negative() {
        offset.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        offset.saturating_add(delta as usize)
    }
}

/// Render the visible sheet panel, or a placeholder when no panel is visible.
pub fn render_sheet(f: &mut Frame, area: Rect, app: &mut App) {
    app.ui.sheet_area = area;

    let Some(index) = app.visible_panel_index() else {
        f.render_widget(
            Paragraph::new("No sheet to display")
                .style(Style::default().fg(Color::DarkGray).italic())
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::top(area.height / 2))),
            area,
        );
        return;
    };
    let Some(sheet) = app.sheet_at(index) else {
        return;
    };

    let state = app.tables[index];
    let block = Block::default()
        .title(sheet.name.clone())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let table = build_table(sheet, state);
    f.render_widget(table, inner);

    if sheet.row_count() > inner.height.saturating_sub(1) as usize {
        let mut scrollbar_state = ScrollbarState::new(sheet.row_count().saturating_sub(1))
            .position(state.row_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

fn build_table(sheet: &Sheet, state: SheetTableState) -> Table<'_> {
    let label_width = sheet
        .row_labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .min(LABEL_COLUMN_MAX as usize) as u16;

    let mut widths = vec![Constraint::Length(label_width.max(MIN_COLUMN_WIDTH))];
    let mut header_cells = vec![Cell::from("")];
    for (col, column) in sheet.columns.iter().enumerate().skip(state.col_offset) {
        widths.push(Constraint::Length(formatting::column_width(
            column,
            sheet.rows.iter().map(|row| &row[col]),
            MIN_COLUMN_WIDTH,
            MAX_COLUMN_WIDTH,
        )));
        header_cells.push(Cell::from(column.as_str()).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let rows = sheet
        .row_labels
        .iter()
        .enumerate()
        .skip(state.row_offset)
        .map(|(row, label)| {
            let mut cells = vec![Cell::from(
                formatting::truncate(label, LABEL_COLUMN_MAX as usize),
            )
            .style(Style::default().fg(Color::Gray))];
            for cell in sheet.rows[row].iter().skip(state.col_offset) {
                cells.push(Cell::from(formatting::format_cell(cell)));
            }
            Row::new(cells)
        });

    Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().bg(Color::Rgb(18, 20, 24))))
        .column_spacing(1)
}
