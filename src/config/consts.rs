// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://lasrera.lagosstate.gov.ng/practitionerSearch.jsp";
pub const PAGE_PLACEHOLDER: &str = "{page}";
pub const USER_AGENT: &str = concat!("dir_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "practitioners.csv";
pub const LOG_FILE: &str = "debug.log";

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 750; // be polite
pub const MAX_PAGES: u32 = 500;
pub const NOT_AVAILABLE: &str = "N/A";

/// Demo address the directory template ships in hidden cards.
pub const PLACEHOLDER_EMAIL: &str = "annaharris@findhouse.com";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "lasrera_practitioners";
