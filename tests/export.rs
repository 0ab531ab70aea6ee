// tests/export.rs
//
// Output path handling and written file contents.
//
use std::fs;
use std::path::Path;

use dir_scrape::config::options::{ExportFormat, ExportOptions};
use dir_scrape::file::{self, export_dataset};
use dir_scrape::store::{self, DataSet};

fn sample() -> DataSet {
    let mut ds = DataSet::practitioners();
    ds.rows = vec![
        vec!["Chioma Eze".into(), "0803 123 4567".into(), "chioma@prime.ng".into(), "14 Admiralty Way, Lekki".into(), "Registered".into()],
        vec!["Ngozi Okafor".into(), "N/A".into(), "N/A".into(), "Broad St".into(), "N/A".into()],
    ];
    ds
}

#[test]
fn default_path_tracks_format() {
    let mut opts = ExportOptions::default();
    assert_eq!(opts.out_path(), Path::new("out").join("lasrera_practitioners.csv"));
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), Path::new("out").join("lasrera_practitioners.tsv"));
}

#[test]
fn typed_format_extension_follows_format_switch() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/agents.csv");
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), Path::new("reports").join("agents.tsv"));
}

#[test]
fn custom_extension_survives_format_switch() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/agents.txt");
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), Path::new("reports").join("agents.txt"));
}

#[test]
fn csv_export_quotes_commas() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(&dir.path().join("nested/agents.csv").to_string_lossy());

    let written = export_dataset(&opts, &sample()).unwrap();
    assert!(written.ends_with("nested/agents.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name,Mobile,Email,Office,Status");
    assert_eq!(lines[1], r#"Chioma Eze,0803 123 4567,chioma@prime.ng,"14 Admiralty Way, Lekki",Registered"#);
    assert_eq!(lines.len(), 3);
}

#[test]
fn tsv_export_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.set_path(&dir.path().join("agents").to_string_lossy());

    let written = export_dataset(&opts, &sample()).unwrap();
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some("tsv"));

    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(text.lines().next(), Some("Chioma Eze\t0803 123 4567\tchioma@prime.ng\t14 Admiralty Way, Lekki\tRegistered"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn clipboard_text_uses_visible_rows_only() {
    let opts = ExportOptions::default();
    let text = file::export_text(&opts, &sample(), &[1]).unwrap();
    assert_eq!(text, "Name,Mobile,Email,Office,Status\nNgozi Okafor,N/A,N/A,Broad St,N/A\n");
}

#[test]
fn out_flag_with_trailing_slash_is_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let hint = format!("{}/exports/", dir.path().display());
    let p = file::resolve_single_out_path(&hint, "lasrera_practitioners.csv").unwrap();
    assert!(p.ends_with("exports/lasrera_practitioners.csv"));
    assert!(dir.path().join("exports").is_dir());
}

#[test]
fn out_flag_pointing_at_file_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("mine.csv");
    let p = file::resolve_single_out_path(&target.to_string_lossy(), "x.csv").unwrap();
    assert_eq!(p, target);
}

#[test]
fn export_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(&blocker.join("agents.csv").to_string_lossy());
    assert!(export_dataset(&opts, &sample()).is_err());
}

#[test]
fn cache_round_trip_keeps_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".store/practitioners.csv");
    let ds = sample();
    store::save_dataset_to(&path, &ds).unwrap();
    assert_eq!(store::load_dataset_from(&path).unwrap(), ds);
}
