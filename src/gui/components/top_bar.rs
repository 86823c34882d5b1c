// src/gui/components/top_bar.rs
//
// Source URL, Fetch / Copy buttons and the status line.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Source:");

        let url_w = (ui.available_width() - 260.0).max(160.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.url_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(url_w),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        // Fetch
        let accent = ui.visuals().selection.bg_fill;
        let button_fetch = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("FETCH").color(egui::Color32::WHITE).strong())
                .fill(accent),
        );
        if button_fetch.clicked() || (enter && !app.running) {
            actions::fetch(app, ui.ctx());
        }

        // Copy
        let button_copy = ui
            .add_enabled(app.table.is_some(), egui::Button::new("Copy"))
            .on_hover_text("Copy the current tab to the clipboard");
        if button_copy.clicked() {
            actions::copy(app, ui.ctx());
        }
    });

    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new().size(14.0));
        }
        ui.label(app.status_text());
    });
    ui.add_space(2.0);
}
