// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

/// Writes pipeline progress into the shared status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        self.set_status(format!("Done: {} ({}/{})", stage, self.done, self.total));
    }
    fn finish(&mut self) {
        self.set_status(s!("Fetch complete"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(status: &Arc<Mutex<String>>) -> String {
        status.lock().unwrap().clone()
    }

    #[test]
    fn stages_are_counted_into_status() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut p = GuiProgress::new(status.clone());

        p.begin(Stage::COUNT);
        p.log("Fetching…");
        assert_eq!(read(&status), "Fetching…");

        p.stage_done(Stage::Fetch);
        assert_eq!(read(&status), "Done: fetch (1/3)");

        p.finish();
        assert_eq!(read(&status), "Fetch complete");
    }
}
