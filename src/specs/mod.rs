// src/specs/mod.rs
//! Page readers: HTML in, records out.
//!
//! A reader owns the selectors for one kind of page and turns a document into
//! typed records plus whatever it can tell about pagination. Missing fields
//! become `"N/A"` rather than errors. Readers never fetch; [`crate::source`]
//! supplies documents and [`crate::scrape`] decides which page comes next.
//!
//! ```text
//! scrape::collect ─ source::PageSource::fetch(page)
//!                 └ practitioners::scan_page(doc) ─> PageScan { records, next }
//! ```
//!
//! Offline fixtures live in `tests/fixtures/`.
pub mod practitioners;
