// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{gui::app::App, config::options::ExportFormat};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let export = &mut app.state.options.export;

    // --- Format + Include headers ---
    let prev_fmt = export.format;
    ui.horizontal(|ui| {
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

        ui.separator();

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            tracing::info!(include_headers = export.include_headers, "ui: include headers toggled");
        }
    });

    if export.format != prev_fmt {
        tracing::info!(format = ?export.format, "ui: export format changed");
        if !app.out_path_dirty {
            app.out_path_text = export.out_path().to_string_lossy().into_owned();
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            tracing::debug!(text = %app.out_path_text, "ui: out path edited");
        }
    });
}
