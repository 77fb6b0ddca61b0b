//! Mutable UI geometry recorded during rendering and consumed by mouse
//! dispatch on the next event.

use ratatui::layout::Rect;

pub struct UiState {
    pub tab_bar_area: Rect,
    /// Click targets, one per tab, refreshed every frame.
    pub tab_areas: Vec<Rect>,
    pub sheet_area: Rect,
}

impl UiState {
    pub fn new(tab_count: usize) -> Self {
        Self {
            tab_bar_area: Rect::default(),
            tab_areas: vec![Rect::default(); tab_count],
            sheet_area: Rect::default(),
        }
    }
}
