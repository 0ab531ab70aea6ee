// src/log.rs
// tracing setup: uptime-stamped lines appended to .store/debug.log,
// optionally mirrored to stderr (CLI).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tracing_subscriber::{
    fmt::{self, time::Uptime},
    prelude::*,
    EnvFilter,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber once. Later calls are no-ops.
/// `RUST_LOG` overrides the default level.
pub fn init(verbose: bool, to_stderr: bool) {
    INIT.get_or_init(|| {
        let default = if verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default));

        let file_layer = open_log_file().map(|file| {
            fmt::layer()
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_target(false)
                .with_writer(Arc::new(file))
        });

        let stderr_layer = to_stderr.then(|| {
            fmt::layer()
                .with_timer(Uptime::default())
                .with_target(false)
                .with_writer(std::io::stderr)
        });

        // Another subscriber may already be installed (tests); keep it.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(stderr_layer)
            .try_init();
    });
}

fn open_log_file() -> Option<fs::File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
        .ok()
}
