//! Error types for filmreel.
//!
//! - [`NetworkError`]: transport and HTTP status failures, with retry
//!   classification, user-facing messages and log codes
//! - [`FetchError`]: the result type of a film fetch, wrapping
//!   `NetworkError` or a decode failure
//!
//! Startup and terminal failures are not modelled here; they propagate to
//! `main` as `color_eyre::Result`.

mod fetch;
mod network;

pub use fetch::FetchError;
pub use network::NetworkError;

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
