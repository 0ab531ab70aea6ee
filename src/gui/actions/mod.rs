// src/gui/actions/mod.rs
// Button handlers; each reports back through the App status line.

mod copy;
mod export;
mod scrape;

pub use copy::copy;
pub use export::export;
pub use scrape::{finish_scrape, scrape};
