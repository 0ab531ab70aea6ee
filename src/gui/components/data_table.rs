// src/gui/components/data_table.rs
//
// Draws the live table. Purely a view over App::data through App::row_ix.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, specs::practitioners::HEADERS};

// Name, Mobile, Email, Office, Status
const WIDTHS: [f32; 5] = [200.0, 120.0, 220.0, 320.0, 90.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let headers: Vec<String> = app.data.headers.clone()
        .unwrap_or_else(|| HEADERS.iter().map(|h| s!(*h)).collect());
    let cols = headers.len();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let w = WIDTHS.get(ci).copied().unwrap_or(100.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let data = &app.data;
    let row_ix = &app.row_ix;

    table
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, row_ix.len(), |mut row| {
                let Some(cells) = row_ix.get(row.index()).and_then(|&ix| data.rows.get(ix)) else { return };
                for ci in 0..cols {
                    let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if cell == crate::config::consts::NOT_AVAILABLE {
                            rt = rt.weak();
                        }
                        ui.label(rt);
                    });
                }
            });
        });
}
