// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        tracing::debug!("copy: clicked, but there's nothing to copy");
        return;
    }

    match file::export_text(&app.state.options.export, &app.data, &app.row_ix) {
        Ok(txt) => {
            tracing::info!(rows = app.row_ix.len(), "copy: to clipboard");
            ui_ctx.copy_text(txt);
            app.status(format!("Copied {} rows to clipboard", app.row_ix.len()));
        }
        Err(e) => {
            tracing::error!("copy: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
