// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::options::SourceSpec,
    gui::{app::{App, ScrapeOutcome}, progress::GuiProgress},
    progress::Progress,
    scrape,
    store,
};

/// Start a scrape on a worker thread; the result is picked up by `App::update`.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running { return; }

    // Align scrape options with the source box
    app.state.options.scrape.source = SourceSpec::from_text(&app.state.gui.source_text);
    let opts = app.state.options.scrape.clone();

    tracing::info!(source = ?opts.source, "scrape: begin (gui)");

    let (tx, rx) = mpsc::channel::<ScrapeOutcome>();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    thread::spawn(move || {
        let outcome = scrape::collect(&opts, Some(&mut prog as &mut dyn Progress)).map_err(|e| e.to_string());
        let _ = tx.send(outcome);
        ctx.request_repaint();
    });

    app.job = Some(rx);
    app.running = true;
    app.status("Scraping…");
}

pub fn finish_scrape(app: &mut App, outcome: ScrapeOutcome) {
    match outcome {
        Ok((ds, stats)) => {
            tracing::info!(rows = ds.row_count(), pages = stats.pages, "scrape: ok (gui)");

            app.data = ds;
            match store::save_dataset(&app.data) {
                Ok(p) => tracing::info!(path = %p.display(), "cache: saved"),
                Err(e) => tracing::error!("cache: save failed: {e}"),
            }
            app.rebuild_view();

            let mut msg = format!("Ready: {} practitioners from {} page(s)", stats.records, stats.pages);
            if stats.duplicates_dropped > 0 {
                msg.push_str(&format!(", {} duplicates dropped", stats.duplicates_dropped));
            }
            if let Some(err) = stats.stopped_by_error {
                msg.push_str(&format!(" (stopped early: {err})"));
            }
            app.status(msg);
        }
        Err(e) => {
            tracing::error!("scrape: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
