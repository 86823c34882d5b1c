// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Full grid, rows are properties.
    #[default]
    Table,
    /// Planet list + drill-down.
    Planets,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Table, Tab::Planets];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Table => "Table",
            Tab::Planets => "Planets",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Planet shown in the drill-down view
    pub selected_planet: Option<String>,

    pub current_tab: Tab,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
