// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use planet_facts::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui,
    log::{self, LogTarget},
};

const ICON: u32 = 64;

/// Ringed planet on a transparent background.
fn app_icon() -> IconData {
    let c = ICON as f32 / 2.0;
    let img = RgbaImage::from_fn(ICON, ICON, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;

        // Ring: a tilted ellipse band, hidden behind the upper half of the body
        let rx = dx;
        let ry = (dy + dx * 0.35) * 3.2;
        let ring = (rx * rx + ry * ry).sqrt();
        let on_ring = (22.0..29.0).contains(&ring);

        let body = (dx * dx + dy * dy).sqrt() < 16.0;
        let ring_in_front = on_ring && ry > 0.0;

        if ring_in_front || (on_ring && !body) {
            Rgba([0xF0, 0xD2, 0x3C, 0xFF])
        } else if body {
            // Light from the top left
            let shade = (1.0 - (dx + dy + 32.0) / 64.0).clamp(0.35, 1.0);
            let tint = |v: f32| (v * shade + 40.0) as u8;
            Rgba([0x00, tint(140.0), tint(186.0), 0xFF])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    IconData { rgba: img.into_raw(), width: ICON, height: ICON }
}

fn main() {
    log::init(LogTarget::File, "info");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
