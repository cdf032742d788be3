//! File logging.
//!
//! The TUI owns stdout, so tracing output goes to
//! `<data dir>/filmreel/filmreel.log`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Default log file location, if the platform has a data directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("filmreel").join("filmreel.log"))
}

/// Open (append) the log file, creating parent directories.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Parse a filter directive, falling back to the default on bad input.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to `path`.
///
/// Returns the path in use, or `None` when logging could not be set up.
/// Failure is never fatal: the app runs without a log.
pub fn init_logging(filter: &str, path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path.or_else(default_log_path)?;
    let file = open_log_file(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "filmreel starting");
    Some(path)
}
