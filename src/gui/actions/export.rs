// src/gui/actions/export.rs
use crate::{gui::app::App, file, store::DataSet};

/// Export the rows currently shown (filter applied) to the output path.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        tracing::info!(path = %app.out_path_text, "export: out path set");
        app.out_path_dirty = false;
    }

    if app.row_ix.is_empty() {
        tracing::debug!("export: clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let view = DataSet {
        headers: app.data.headers.clone(),
        rows: app.row_ix.iter().filter_map(|&i| app.data.rows.get(i).cloned()).collect(),
    };

    match file::export_dataset(&app.state.options.export, &view) {
        Ok(path) => app.status(format!("Exported {} rows → {}", view.row_count(), path.display())),
        Err(e) => {
            tracing::error!("export: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}
