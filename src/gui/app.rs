// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::{Receiver, TryRecvError}, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    scrape::RunStats,
    store::{self, DataSet},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Practitioner Directory Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new())))),
    )?;
    Ok(())
}

/// Result handed back by the scrape worker.
pub type ScrapeOutcome = Result<(DataSet, RunStats), String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // canonical table + rows currently shown (after filter)
    pub data: DataSet,
    pub row_ix: Vec<usize>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<Receiver<ScrapeOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        let data = match store::load_dataset() {
            Ok(ds) if !ds.is_empty() => {
                tracing::info!(rows = ds.row_count(), headers = ds.header_count(), "cache: loaded");
                status = s!("Loaded local data");
                ds
            }
            Ok(_) => DataSet::practitioners(),
            Err(e) => {
                tracing::debug!("cache: none ({e})");
                DataSet::practitioners()
            }
        };

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            out_path_text,
            out_path_dirty: false,
            data,
            row_ix: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            job: None,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        set_status(&self.status, msg);
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Recompute visible rows from the filter box.
    pub fn rebuild_view(&mut self) {
        self.row_ix = self.data.filter_indices(&self.state.gui.filter_text);
    }

    /// Pick up a finished scrape, if any.
    fn poll_job(&mut self) {
        let Some(rx) = &self.job else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.job = None;
                self.running = false;
                super::actions::finish_scrape(self, outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.job = None;
                self.running = false;
                tracing::error!("scrape: worker ended without a result");
                self.status("Error: scrape worker stopped unexpectedly");
            }
        }
    }
}

pub fn set_status(status: &Mutex<String>, msg: impl Into<String>) {
    let mut guard = status.lock().unwrap_or_else(|p| p.into_inner());
    *guard = msg.into();
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            super::components::source_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);

            super::components::action_buttons::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
