// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    config::{options::View, state::Tab},
    csv::to_export_string,
    file::grid_for,
    gui::app::App,
};

/// Copy what the current tab shows: the full grid as TSV, or the selected
/// planet's facts one `label: value` per line.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.table.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no table");
        return;
    };

    let txt = match app.state.gui.current_tab {
        Tab::Table => {
            let (h, r) = grid_for(View::Property, table);
            logf!("Copy: grid rows={}, headers={}", r.len(), h.len());
            to_export_string(&h, &r, true, '\t')
        }
        Tab::Planets => {
            let Some(planet) = app
                .state
                .gui
                .selected_planet
                .as_deref()
                .and_then(|name| table.planet(name))
            else {
                app.status("Nothing to copy (no planet selected)");
                return;
            };
            logf!("Copy: planet={}", planet);
            planet
                .facts()
                .iter()
                .map(|f| format!("{f}\n"))
                .collect::<String>()
        }
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
