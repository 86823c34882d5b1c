// src/gui/actions/fetch.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

/// Start a fetch on a worker thread. No-op while one is in flight.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Fetch: Clicked while running, ignored");
        return;
    }

    let url = app.url_text.trim();
    if !url.is_empty() {
        app.state.options.source.url = s!(url);
    }
    app.url_text = app.state.options.source.url.clone();

    let source = app.state.options.source.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    logf!("Fetch: Begin url={}", source.url);
    app.status(format!("Fetching {}…", source.url));
    app.running = true;
    app.pending = Some(rx);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);

        // → This is where the fetch happens ←
        let res = scrape::run(&source, Some(&mut prog));

        // Receiver gone means the window closed; nothing left to update
        let _ = tx.send(res);
        ctx.request_repaint();
    });
}

/// Pick up a finished fetch, if any. Called once per frame.
pub fn poll(app: &mut App) {
    let Some(rx) = app.pending.as_ref() else { return };

    let res = match rx.try_recv() {
        Ok(res) => res,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            loge!("Fetch: Worker exited without a result");
            app.pending = None;
            app.running = false;
            app.clear_table();
            app.status("Error: fetch worker stopped");
            return;
        }
    };

    app.pending = None;
    app.running = false;

    match res {
        Ok(table) => {
            logf!(
                "Fetch: OK planets={}, properties={}",
                table.planet_count(),
                table.property_count()
            );
            app.set_table(table);
            app.status("Ready");
        }
        Err(e) => {
            loge!("Fetch: Error: {e}");
            app.clear_table();
            app.status(format!("Error: {e}"));
        }
    }
}
