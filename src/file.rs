// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::{Result, ScrapeError};
use crate::store::DataSet;

/// Write the dataset to the file named by `export` (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn export_dataset(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path();
    write_export(&path, export, ds)?;
    tracing::info!(path = %path.display(), rows = ds.row_count(), "export: written");
    Ok(path)
}

/// Same as [`export_dataset`] but to an explicit path.
pub fn write_export(path: &Path, export: &ExportOptions, ds: &DataSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        &ds.headers,
        &ds.rows,
        export.include_headers,
        export.format.delim(),
    )?;
    fs::write(path, contents)?;
    Ok(())
}

/// Text for the clipboard, formatted exactly as an export would be.
pub fn export_text(export: &ExportOptions, ds: &DataSet, row_ix: &[usize]) -> Result<String> {
    let rows: Vec<Vec<String>> = row_ix.iter()
        .filter_map(|&i| ds.rows.get(i).cloned())
        .collect();
    to_export_string(&ds.headers, &rows, export.include_headers, export.format.delim())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `-o` handling: empty -> default file; trailing separator or existing
/// directory -> default file inside it; otherwise the path itself.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
