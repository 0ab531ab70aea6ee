// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where directory pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSpec {
    /// Live URL; may contain `{page}` for server-side pagination.
    Url(String),
    /// Directory of saved HTML pages, read in file-name order.
    Dir(PathBuf),
    /// Explicit list of saved pages, one per page.
    Files(Vec<PathBuf>),
}

impl Default for SourceSpec {
    fn default() -> Self { SourceSpec::Url(s!(DEFAULT_URL)) }
}

impl SourceSpec {
    /// Parse free text from the GUI source box: an existing directory or file
    /// becomes a local source, anything else is taken as a URL.
    pub fn from_text(text: &str) -> Self {
        let t = text.trim();
        let p = Path::new(t);
        if !t.starts_with("http://") && !t.starts_with("https://") {
            if p.is_dir() { return SourceSpec::Dir(p.to_path_buf()); }
            if p.is_file() { return SourceSpec::Files(vec![p.to_path_buf()]); }
        }
        SourceSpec::Url(s!(t))
    }

    pub fn to_text(&self) -> String {
        match self {
            SourceSpec::Url(u) => u.clone(),
            SourceSpec::Dir(d) => d.to_string_lossy().into_owned(),
            SourceSpec::Files(f) => f.iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: SourceSpec,
    pub max_pages: u32,
    pub pause_ms: u64,
    /// Drop rows identical to an earlier row.
    pub dedupe: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source: SourceSpec::default(),
            max_pages: MAX_PAGES,
            pause_ms: REQUEST_PAUSE_MS,
            dedupe: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension follows the format unless the user
    /// typed a non-format one.
    pub fn out_path(&self) -> PathBuf {
        let ext = match &self.out_path.custom_ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", ext))
    }

    /// Parse user text into dir + stem (+ extension when it isn't csv/tsv).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());

        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.custom_ext = p.extension()
            .filter(|e| ExportFormat::from_ext(&e.to_string_lossy()).is_none())
            .map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    custom_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            custom_ext: None,
        }
    }
}
