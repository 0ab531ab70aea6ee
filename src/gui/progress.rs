// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Progress sink for the scrape worker: writes the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    records: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, records: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        super::app::set_status(&self.status, msg);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, source: &str) {
        self.set_status(format!("Fetching {source}…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn page_done(&mut self, page: u32, records: usize) {
        self.records += records;
        self.set_status(format!("Page {} done ({} practitioners so far)", page, self.records));
    }
    fn page_failed(&mut self, page: u32, err: &str) {
        self.set_status(format!("Page {page} failed: {err}"));
    }
    fn finish(&mut self, total: usize) {
        self.set_status(format!("Fetch complete ({total} practitioners)"));
    }
}
