// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first page is fetched.
    fn begin(&mut self, _source: &str) {}

    /// Free-form status line, e.g. why the page walk stopped.
    fn log(&mut self, _msg: &str) {}

    /// One directory page was read; `records` cards found on it.
    fn page_done(&mut self, _page: u32, _records: usize) {}

    /// A page after the first could not be fetched or read; scraping stops there.
    fn page_failed(&mut self, _page: u32, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _total: usize) {}
}
