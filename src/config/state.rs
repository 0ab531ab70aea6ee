// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Source box text; mapped to `ScrapeOptions::source` on Scrape.
    pub source_text: String,

    /// Case-insensitive filter over all columns of the table.
    pub filter_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            source_text: s!(),
            filter_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new() -> Self {
        let options = AppOptions::default();
        let gui = GuiState {
            source_text: options.scrape.source.to_text(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
