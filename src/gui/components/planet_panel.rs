// src/gui/components/planet_panel.rs
//
// Left: planet list. Right: every fact of the selected planet.

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label(if app.running { "Fetching…" } else { "No data" });
        });
        return;
    };

    let names = table.planet_names().to_vec();
    let selected = app.state.gui.selected_planet.clone();
    let planet = selected.as_deref().and_then(|name| table.planet(name));

    egui::SidePanel::left("planet_list")
        .resizable(false)
        .exact_width(160.0)
        .show_inside(ui, |ui| {
            ui.heading("Planets");
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("planet_list_scroll")
                .show(ui, |ui| {
                    for name in &names {
                        let is_selected = selected.as_deref() == Some(name.as_str());
                        if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                            logf!("UI: Planet selected → {name}");
                            app.state.gui.selected_planet = Some(name.clone());
                        }
                    }
                });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        let Some(planet) = planet else {
            ui.label("Select a planet");
            return;
        };

        ui.heading(planet.name());
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("planet_facts_scroll")
            .show(ui, |ui| {
                egui::Grid::new("planet_facts_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for fact in planet.facts() {
                            ui.label(RichText::new(&fact.label).strong());
                            ui.label(&fact.value);
                            ui.end_row();
                        }
                    });
            });
    });
}
