//! Application configuration.
//!
//! Defaults, overridden by environment variables, overridden by CLI flags.

use std::time::Duration;

/// Endpoint serving the film listing.
pub const DEFAULT_FILMS_URL: &str = "https://swapi.dev/api/films";

/// Request timeout applied to the films request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_URL: &str = "FILMREEL_URL";
pub const ENV_TIMEOUT: &str = "FILMREEL_TIMEOUT_SECS";
pub const ENV_LOG: &str = "FILMREEL_LOG";

/// Runtime configuration.
///
/// # Example
///
/// ```
/// use filmreel::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_films_url("http://localhost:8080/films")
///     .with_timeout_secs(5);
/// assert_eq!(config.timeout_secs, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL the films are fetched from
    pub films_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            films_url: DEFAULT_FILMS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_films_url(mut self, url: impl Into<String>) -> Self {
        self.films_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build config from `FILMREEL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Empty values and unparseable timeouts (including zero) keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            config.films_url = url.trim().to_string();
        }
        if let Some(secs) = lookup(ENV_TIMEOUT)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout_secs = secs;
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}
