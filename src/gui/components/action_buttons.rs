// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let button_scrape = ui.add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                    .color(egui::Color32::BLACK)
                    .strong())
                .fill(red));

        if button_scrape.clicked() {
            let ctx = ui.ctx().clone();
            actions::scrape(app, &ctx);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });

    ui.horizontal(|ui| {
        ui.label("Filter:");
        if ui.text_edit_singleline(&mut app.state.gui.filter_text).changed() {
            app.rebuild_view();
        }
        ui.label(format!("{} / {} rows", app.row_ix.len(), app.data.row_count()));
    });
}
