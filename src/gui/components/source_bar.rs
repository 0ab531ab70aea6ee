// src/gui/components/source_bar.rs
//
// Source box (URL, {page} template, saved page or folder) + scrape knobs.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Source:");
        let width = ui.available_width() - 8.0;
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_text)
                .font(egui::TextStyle::Monospace)
                .hint_text("https://…/list?page={page}  or a folder of saved pages")
                .desired_width(width),
        )
        .on_hover_text("URL (use {page} for numbered pages), a saved .html page, or a folder of them");
    });

    let scrape = &mut app.state.options.scrape;
    ui.horizontal(|ui| {
        ui.label("Max pages:");
        ui.add(egui::DragValue::new(&mut scrape.max_pages).range(1..=10_000));

        ui.label("Pause (ms):");
        ui.add(egui::DragValue::new(&mut scrape.pause_ms).range(0..=10_000));

        if ui.checkbox(&mut scrape.dedupe, "Drop duplicate rows").changed() {
            tracing::info!(dedupe = scrape.dedupe, "ui: dedupe toggled");
        }
    });
    ui.add_space(4.0);
}
