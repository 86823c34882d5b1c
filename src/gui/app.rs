// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui::{self, Color32};

use crate::{
    config::{options::View, state::{AppState, Tab}},
    data::PlanetTable,
};

use super::{actions, components, table_model::TableData};

const BG: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
const ACCENT: Color32 = Color32::from_rgb(0x00, 0x8C, 0xBA);

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Planetary Fact Sheet - Ratio to Earth Values",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // source URL text field; copied into options when a fetch starts
    pub url_text: String,

    // last good table, and its grid for the Table tab
    pub table: Option<PlanetTable>,
    pub grid: TableData,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<crate::Result<PlanetTable>>>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        apply_theme(&cc.egui_ctx);

        let url_text = state.options.source.url.clone();
        let mut app = Self {
            state,
            url_text,
            table: None,
            grid: TableData::empty(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        };

        logf!("Init: source={}", app.state.options.source.url);

        // The viewer opens on data, so fetch right away
        actions::fetch(&mut app, &cc.egui_ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Swap in a freshly fetched table and rebuild the grid.
    pub fn set_table(&mut self, table: PlanetTable) {
        self.grid = TableData::from_table(View::Property, &table);

        // Keep the drill-down selection if that planet still exists
        let keep = self
            .state
            .gui
            .selected_planet
            .as_deref()
            .is_some_and(|name| table.record(name).is_some());
        if !keep {
            self.state.gui.selected_planet = table.planet_names().first().cloned();
        }

        self.table = Some(table);
    }

    /// Error state: nothing from a failed fetch is ever rendered.
    pub fn clear_table(&mut self) {
        self.table = None;
        self.grid = TableData::empty();
        self.state.gui.selected_planet = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("source_bar").show(ctx, |ui| {
            components::top_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.current_tab {
                Tab::Table => components::data_table::draw(ui, self),
                Tab::Planets => components::planet_panel::draw(ui, self),
            }
        });
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG;
    visuals.window_fill = BG;
    visuals.extreme_bg_color = BG;
    visuals.override_text_color = Some(Color32::WHITE);
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);
}
