// src/source.rs
//! Page source providers.
//!
//! A [`PageSource`] hands out one HTML document per directory page. Live
//! sites go through [`HttpSource`]; pages saved from a browser (the directory
//! paginates client side, so a plain GET only ever sees page 1) go through
//! [`FileSource`].

use std::{fs, path::{Path, PathBuf}};

use reqwest::blocking::Client;

use crate::{
    config::{consts::PAGE_PLACEHOLDER, options::SourceSpec},
    core::net,
    error::{Result, ScrapeError},
};

pub trait PageSource {
    /// Human-readable origin, for logs and status lines.
    fn describe(&self) -> String;

    /// Fetch 1-based `page`. `Ok(None)` when the source has no such page.
    fn fetch(&mut self, page: u32) -> Result<Option<String>>;

    /// True when every page is a separate document addressed by number,
    /// so the in-page "next" control is not authoritative.
    fn paged(&self) -> bool { false }
}

/// Build the source named by `spec`.
pub fn open(spec: &SourceSpec) -> Result<Box<dyn PageSource + Send>> {
    Ok(match spec {
        SourceSpec::Url(u) => Box::new(HttpSource::new(u)?),
        SourceSpec::Dir(d) => Box::new(FileSource::from_dir(d)?),
        SourceSpec::Files(f) => Box::new(FileSource::new(f.clone())),
    })
}

/* ---------------- HTTP ---------------- */

pub struct HttpSource {
    template: String,
    client: Client,
}

impl HttpSource {
    pub fn new(template: &str) -> Result<Self> {
        let t = template.trim();
        if !(t.starts_with("http://") || t.starts_with("https://")) {
            return Err(ScrapeError::Source(format!("not an http(s) URL: {t}")));
        }
        Ok(Self { template: s!(t), client: net::client()? })
    }

    pub fn url_for(&self, page: u32) -> Option<String> {
        page_url(&self.template, page)
    }
}

/// Substitute `{page}`; templates without it only have page 1.
pub fn page_url(template: &str, page: u32) -> Option<String> {
    if template.contains(PAGE_PLACEHOLDER) {
        Some(template.replace(PAGE_PLACEHOLDER, &page.to_string()))
    } else if page == 1 {
        Some(s!(template))
    } else {
        None
    }
}

impl PageSource for HttpSource {
    fn describe(&self) -> String { self.template.clone() }

    fn fetch(&mut self, page: u32) -> Result<Option<String>> {
        match self.url_for(page) {
            Some(url) => net::http_get(&self.client, &url).map(Some),
            None => Ok(None),
        }
    }

    fn paged(&self) -> bool { self.template.contains(PAGE_PLACEHOLDER) }
}

/* ---------------- Saved pages ---------------- */

pub struct FileSource {
    files: Vec<PathBuf>,
}

impl FileSource {
    pub fn new(files: Vec<PathBuf>) -> Self { Self { files } }

    /// Every `.html`/`.htm` file in `dir`, sorted by file name.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() { continue; }
            let ext = path.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase())
                .unwrap_or_default();
            if ext == "html" || ext == "htm" { files.push(path); }
        }
        if files.is_empty() {
            return Err(ScrapeError::Source(format!("no .html files in {}", dir.display())));
        }
        files.sort();
        Ok(Self { files })
    }

    pub fn len(&self) -> usize { self.files.len() }
    pub fn is_empty(&self) -> bool { self.files.is_empty() }
}

impl PageSource for FileSource {
    fn describe(&self) -> String {
        match self.files.as_slice() {
            [one] => one.display().to_string(),
            many => format!("{} saved pages", many.len()),
        }
    }

    fn fetch(&mut self, page: u32) -> Result<Option<String>> {
        let Some(ix) = (page as usize).checked_sub(1) else { return Ok(None) };
        match self.files.get(ix) {
            Some(p) => Ok(Some(fs::read_to_string(p)?)),
            None => Ok(None),
        }
    }

    // Each file is its own page.
    fn paged(&self) -> bool { true }
}

/* ---------------- In-memory ---------------- */

/// Pages held in memory; used by tests and benches.
pub struct MemorySource {
    pages: Vec<String>,
    pub fetched: u32,
}

impl MemorySource {
    pub fn new(pages: Vec<String>) -> Self { Self { pages, fetched: 0 } }
}

impl PageSource for MemorySource {
    fn describe(&self) -> String { format!("{} in-memory pages", self.pages.len()) }

    fn fetch(&mut self, page: u32) -> Result<Option<String>> {
        let Some(ix) = (page as usize).checked_sub(1) else { return Ok(None) };
        let doc = self.pages.get(ix).cloned();
        if doc.is_some() { self.fetched += 1; }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_substitution() {
        assert_eq!(page_url("https://x.ng/a?p={page}", 3).as_deref(), Some("https://x.ng/a?p=3"));
        assert_eq!(page_url("https://x.ng/a", 1).as_deref(), Some("https://x.ng/a"));
        assert_eq!(page_url("https://x.ng/a", 2), None);
    }

    #[test]
    fn http_source_rejects_non_urls() {
        assert!(matches!(HttpSource::new("ftp://x"), Err(ScrapeError::Source(_))));
    }

    #[test]
    fn memory_source_is_one_based() {
        let mut src = MemorySource::new(vec![s!("a"), s!("b")]);
        assert_eq!(src.fetch(0).unwrap(), None);
        assert_eq!(src.fetch(2).unwrap().as_deref(), Some("b"));
        assert_eq!(src.fetch(3).unwrap(), None);
        assert_eq!(src.fetched, 1);
    }
}
