//! Selector tabs, sheet panels and the activation logic tying them together.
//!
//! Exactly one tab is active at all times. At most one panel is visible: the
//! one whose id equals the active tab's `panel_id`. A tab whose `panel_id`
//! matches no panel leaves every panel hidden; that is a markup defect of the
//! caller, not a runtime error.

use super::App;

/// Prefix joined with a sheet name to form the panel id the tab points at.
pub const PANEL_ID_PREFIX: &str = "sheet-";

/// One selectable tab in the selector row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetTab {
    pub id: String,
    pub label: String,
    /// Id of the panel this tab reveals.
    pub panel_id: String,
    pub active: bool,
}

/// One content pane, shown while its tab is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetPanel {
    pub id: String,
    pub visible: bool,
}

/// Which tab gets the initial activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultSheet {
    First,
    ByName(String),
}

impl App {
    pub fn active_tab_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active)
    }

    pub fn visible_panel(&self) -> Option<&SheetPanel> {
        self.panels.iter().find(|panel| panel.visible)
    }

    pub fn visible_panel_index(&self) -> Option<usize> {
        self.panels.iter().position(|panel| panel.visible)
    }

    /// Activate the tab at `index`: every other tab goes inactive, every
    /// panel goes hidden, then the panel matching the tab's `panel_id` is
    /// shown. Out-of-range indices are ignored.
    pub fn activate_tab(&mut self, index: usize) {
        let Some(panel_id) = self.tabs.get(index).map(|tab| tab.panel_id.clone()) else {
            return;
        };
        for tab in &mut self.tabs {
            tab.active = false;
        }
        self.tabs[index].active = true;

        for panel in &mut self.panels {
            panel.visible = false;
        }
        match self.panels.iter_mut().find(|panel| panel.id == panel_id) {
            Some(panel) => panel.visible = true,
            None => tracing::warn!(%panel_id, "tab points at an unknown panel"),
        }
        tracing::debug!(tab = index, %panel_id, "sheet activated");
    }

    /// Perform the initial activation so one panel is visible before any
    /// user interaction.
    pub fn activate_default(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let index = match &self.context.default_sheet {
            DefaultSheet::First => 0,
            DefaultSheet::ByName(name) => {
                match self.tabs.iter().position(|tab| &tab.label == name) {
                    Some(index) => index,
                    None => {
                        tracing::warn!(sheet = %name, "default sheet not found, using first");
                        0
                    }
                }
            }
        };
        self.activate_tab(index);
    }

    pub fn next_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let current = self.active_tab_index().unwrap_or(0);
        self.activate_tab((current + 1) % self.tabs.len());
    }

    pub fn prev_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let current = self.active_tab_index().unwrap_or(0);
        self.activate_tab((current + self.tabs.len() - 1) % self.tabs.len());
    }
}
