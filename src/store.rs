// src/store.rs
// Canonical table + the local cache of the last scrape.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{STORE_DIR, STORE_FILE};
use crate::csv;
use crate::error::Result;
use crate::specs::practitioners::HEADERS;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Empty table with the practitioner headers.
    pub fn practitioners() -> Self {
        Self {
            headers: Some(HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: Vec::new(),
        }
    }

    #[inline] pub fn row_count(&self) -> usize { self.rows.len() }
    #[inline] pub fn header_count(&self) -> usize { self.headers.as_ref().map_or(0, |h| h.len()) }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Keep the first occurrence of each identical row; returns how many were dropped.
    pub fn dedupe(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen = std::collections::HashSet::new();
        self.rows.retain(|r| seen.insert(r.clone()));
        before - self.rows.len()
    }

    /// Indices of rows where any cell contains `needle` (case-insensitive).
    pub fn filter_indices(&self, needle: &str) -> Vec<usize> {
        let n = needle.trim().to_lowercase();
        if n.is_empty() { return (0..self.rows.len()).collect(); }
        self.rows.iter()
            .enumerate()
            .filter(|(_, r)| r.iter().any(|c| c.to_lowercase().contains(&n)))
            .map(|(i, _)| i)
            .collect()
    }
}

pub fn cache_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_FILE)
}

pub fn save_dataset(ds: &DataSet) -> io::Result<PathBuf> {
    let p = cache_path();
    save_dataset_to(&p, ds)?;
    Ok(p)
}

pub fn load_dataset() -> Result<DataSet> {
    load_dataset_from(&cache_path())
}

pub fn save_dataset_to(path: &Path, ds: &DataSet) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = csv::to_export_string(&ds.headers, &ds.rows, true, b',')
        .map_err(io::Error::other)?;
    fs::write(path, text)
}

/// Read a cache file. The first row is the header when it matches the
/// practitioner columns.
pub fn load_dataset_from(path: &Path) -> Result<DataSet> {
    let text = fs::read_to_string(path)?;
    let mut rows = csv::parse_rows(&text, b',')?;

    let headers = match rows.first() {
        Some(first) if is_practitioner_header(first) => Some(rows.remove(0)),
        _ => None,
    };
    Ok(DataSet { headers, rows })
}

fn is_practitioner_header(row: &[String]) -> bool {
    row.len() == HEADERS.len()
        && row.iter().zip(HEADERS).all(|(a, b)| a.eq_ignore_ascii_case(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> { cells.iter().map(|c| s!(*c)).collect() }

    #[test]
    fn dedupe_keeps_first() {
        let mut ds = DataSet::practitioners();
        ds.rows = vec![row(&["a", "1"]), row(&["b", "2"]), row(&["a", "1"])];
        assert_eq!(ds.dedupe(), 1);
        assert_eq!(ds.rows, vec![row(&["a", "1"]), row(&["b", "2"])]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut ds = DataSet::practitioners();
        ds.rows = vec![row(&["Ada Obi", "Ikeja"]), row(&["Tunde", "Lekki"])];
        assert_eq!(ds.filter_indices("lekki"), vec![1]);
        assert_eq!(ds.filter_indices("  "), vec![0, 1]);
    }

    #[test]
    fn cache_round_trip_detects_header() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nested").join("cache.csv");
        let mut ds = DataSet::practitioners();
        ds.rows = vec![row(&["Ada, Obi", "080", "N/A", "Ikeja", "Active"])];
        save_dataset_to(&p, &ds).unwrap();
        assert_eq!(load_dataset_from(&p).unwrap(), ds);
    }
}
