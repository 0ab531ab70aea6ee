// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};

use crate::{
    config::{
        consts::{DEFAULT_FILE, DEFAULT_URL, MAX_PAGES, REQUEST_PAUSE_MS},
        options::{AppOptions, ExportFormat, SourceSpec},
    },
    core::cfemail,
    file,
    progress::Progress,
    scrape, store,
};

/// Scrape a paginated practitioner directory into CSV/TSV.
#[derive(Parser, Debug)]
#[command(name = "dir_scrape", version)]
pub struct Args {
    /// Directory URL; `{page}` is replaced with 1, 2, 3, …
    #[arg(long, default_value = DEFAULT_URL, conflicts_with_all = ["from_dir", "files"])]
    pub url: String,

    /// Folder of saved .html pages, read in file-name order
    #[arg(long, value_name = "DIR", conflicts_with = "files")]
    pub from_dir: Option<PathBuf>,

    /// Saved .html page(s), one per directory page
    #[arg(long = "file", value_name = "PATH", num_args = 1..)]
    pub files: Vec<PathBuf>,

    #[arg(long, default_value_t = MAX_PAGES)]
    pub max_pages: u32,

    /// Pause between page fetches
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Output file, or a directory (trailing slash) to hold the default file
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Output format; defaults to the `-o` extension, else csv
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Drop rows identical to an earlier row
    #[arg(long)]
    pub dedupe: bool,

    /// Decode a single data-cfemail token and exit
    #[arg(long, value_name = "TOKEN")]
    pub decode: Option<String>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f { Format::Csv => ExportFormat::Csv, Format::Tsv => ExportFormat::Tsv }
    }
}

impl Args {
    /// Map flags onto the shared option structs.
    pub fn to_options(&self) -> color_eyre::Result<AppOptions> {
        let mut opts = AppOptions::default();

        opts.scrape.source = if let Some(dir) = &self.from_dir {
            SourceSpec::Dir(dir.clone())
        } else if !self.files.is_empty() {
            SourceSpec::Files(self.files.clone())
        } else {
            SourceSpec::Url(self.url.clone())
        };
        opts.scrape.max_pages = self.max_pages.max(1);
        opts.scrape.pause_ms = self.pause_ms;
        opts.scrape.dedupe = self.dedupe;

        let typed = self.out.as_deref().and_then(typed_format);
        let format = match (self.format.map(ExportFormat::from), typed) {
            (Some(flag), Some(ext)) if flag != ext => {
                return Err(eyre!(
                    "--format {} does not match output extension .{}",
                    flag.ext(),
                    ext.ext()
                ));
            }
            (Some(flag), _) => flag,
            (None, Some(ext)) => ext,
            (None, None) => ExportFormat::Csv,
        };

        let export = &mut opts.export;
        export.format = format;
        export.include_headers = !self.no_headers;
        if let Some(o) = &self.out {
            let default_name = join!(DEFAULT_FILE, ".", format.ext());
            let path = file::resolve_single_out_path(o, &default_name)?;
            export.set_path(&path.to_string_lossy());
        }
        Ok(opts)
    }
}

/// `.csv`/`.tsv` typed on an output file; directories have none.
fn typed_format(out: &str) -> Option<ExportFormat> {
    if out.ends_with('/') || out.ends_with('\\') {
        return None;
    }
    Path::new(out)
        .extension()
        .and_then(|e| ExportFormat::from_ext(&e.to_string_lossy()))
}

/// Progress lines on stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, source: &str) { eprintln!("Fetching {source}"); }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn page_done(&mut self, page: u32, records: usize) {
        eprintln!("Page {page}: {records} practitioners");
    }
    fn page_failed(&mut self, page: u32, err: &str) {
        eprintln!("Page {page} failed, keeping earlier pages: {err}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    crate::log::init(args.verbose, true);

    if let Some(token) = &args.decode {
        let plain = cfemail::decode(token)?;
        println!("{plain}");
        return Ok(());
    }

    let opts = args.to_options()?;
    let mut progress = CliProgress;
    let (ds, stats) = scrape::collect(&opts.scrape, Some(&mut progress as &mut dyn Progress))
        .wrap_err("scrape failed")?;

    if ds.is_empty() {
        return Err(eyre!("no practitioners found"));
    }

    if let Err(e) = store::save_dataset(&ds) {
        tracing::warn!("cache: save failed: {e}");
    }
    let path = file::export_dataset(&opts.export, &ds).wrap_err("export failed")?;

    println!("Pages processed: {}", stats.pages);
    println!("Practitioners:   {}", stats.records);
    if stats.duplicates_dropped > 0 {
        println!("Duplicates:      {} dropped", stats.duplicates_dropped);
    }
    if let Some(err) = &stats.stopped_by_error {
        println!("Stopped early:   {err}");
    }
    println!("Wrote {}", path.display());
    Ok(())
}
