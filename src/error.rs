// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::cfemail::DecodeError;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    #[error("no practitioner records found on page {page}")]
    NoRecords { page: u32 },

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("page source: {0}")]
    Source(String),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
