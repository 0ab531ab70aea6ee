// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod source;
pub mod store;

pub use crate::core::cfemail::{decode, DecodeError};
pub use error::{Result, ScrapeError};
