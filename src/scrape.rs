// src/scrape.rs
// Pagination loop: page source -> specs::practitioners -> DataSet.

use std::{thread, time::Duration};

use crate::{
    config::options::ScrapeOptions,
    error::{Result, ScrapeError},
    progress::Progress,
    source::{self, PageSource},
    specs::practitioners::{self, NextPage},
    store::DataSet,
};

/// Summary of one run, beside the data itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub pages: u32,
    pub records: usize,
    pub duplicates_dropped: usize,
    /// Set when a later page failed and the run stopped early.
    pub stopped_by_error: Option<String>,
}

/// Open the configured source and collect every practitioner.
pub fn collect(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<(DataSet, RunStats)> {
    let mut src = source::open(&opts.source)?;
    collect_practitioners(src.as_mut(), opts, progress)
}

/// Walk pages 1.. of `src` until the directory runs out.
///
/// Errors on page 1 (including a page 1 without cards) are returned; errors
/// on later pages end the walk and keep what was gathered.
pub fn collect_practitioners(
    src: &mut dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(DataSet, RunStats)> {
    let origin = src.describe();
    tracing::info!(source = %origin, max_pages = opts.max_pages, "scrape: begin");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&origin);
    }

    let mut ds = DataSet::practitioners();
    let mut stats = RunStats::default();
    let paged = src.paged();

    let mut page = 1u32;
    while page <= opts.max_pages {
        if page > 1 && opts.pause_ms > 0 {
            thread::sleep(Duration::from_millis(opts.pause_ms));
        }

        let scan = match src.fetch(page).and_then(|doc| doc.map(|d| practitioners::scan_page(&d)).transpose()) {
            Ok(Some(scan)) => scan,
            Ok(None) => {
                tracing::info!(page, "scrape: source has no more pages");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("No page {page}; done"));
                }
                break;
            }
            Err(e) if page == 1 => {
                tracing::error!(page, "scrape: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.finish(0);
                }
                return Err(e);
            }
            Err(e) => {
                tracing::error!(page, "scrape: stopping early: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page, &e.to_string());
                }
                stats.stopped_by_error = Some(e.to_string());
                break;
            }
        };

        if scan.records.is_empty() {
            if page == 1 {
                // Usually a page whose cards are rendered by script.
                tracing::error!(page, "scrape: no practitioner cards");
                if let Some(p) = progress.as_deref_mut() {
                    p.finish(0);
                }
                return Err(ScrapeError::NoRecords { page });
            }
            tracing::info!(page, "scrape: no practitioners on page");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Page {page} is empty; done"));
            }
            break;
        }

        let n = scan.records.len();
        ds.rows.extend(scan.records.iter().map(|r| r.to_row()));
        stats.pages = page;
        tracing::info!(page, records = n, next = ?scan.next, "scrape: page done");
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, n);
        }

        let more = match scan.next {
            NextPage::Available => true,
            NextPage::Disabled => false,
            // Without a pager only numbered sources know there is more.
            NextPage::Missing => paged,
        };
        if !more {
            tracing::info!(page, "scrape: reached last page");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Page {page} is the last page"));
            }
            break;
        }
        page += 1;
    }

    if opts.dedupe {
        stats.duplicates_dropped = ds.dedupe();
    }
    stats.records = ds.row_count();

    tracing::info!(pages = stats.pages, records = stats.records, "scrape: done");
    if let Some(p) = progress.as_deref_mut() {
        p.finish(stats.records);
    }
    Ok((ds, stats))
}
