// src/core/mod.rs

pub mod cfemail;
pub mod html;
pub mod net;
pub mod sanitize;

pub use cfemail::{decode, DecodeError};
