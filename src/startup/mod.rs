//! Startup: configuration and logging.

pub mod config;
pub mod logging;

pub use config::{AppConfig, DEFAULT_FILMS_URL, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_SECS};
pub use logging::init_logging;
