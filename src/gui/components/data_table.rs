// src/gui/components/data_table.rs
//
// Draws the full property-major grid. Purely a view over `app.grid`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::core::sanitize::looks_numeric;
use crate::gui::app::App;

const LABEL_W: f32 = 200.0;
const VALUE_W: f32 = 80.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let grid = &app.grid;

    if grid.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if app.running { "Fetching…" } else { "No data" });
        });
        return;
    }

    let cols = grid.ncols();

    egui::ScrollArea::horizontal()
        .id_salt("planet_table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0)
                .cell_layout(Layout::left_to_right(Align::Center));

            for ci in 0..cols {
                let w = if ci == 0 { LABEL_W } else { VALUE_W };
                table = table.column(Column::initial(w).at_least(40.0).clip(true));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in grid.headers.iter().enumerate() {
                        header.col(|ui| {
                            let rt = RichText::new(h).strong();
                            if ci == 0 {
                                ui.label(rt);
                            } else {
                                ui.centered_and_justified(|ui| { ui.label(rt); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, grid.nrows(), |mut row| {
                        let ri = row.index();
                        for ci in 0..cols {
                            let cell = grid.cell(ri, ci).unwrap_or_default();
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if ci == 0 {
                                    // Labels carry the property's unit note; keep them readable
                                    ui.label(RichText::new(cell).strong());
                                } else if looks_numeric(cell) {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
