//! Network-related error types.
//!
//! Errors raised while talking to the films endpoint: connection problems,
//! DNS, timeouts, TLS and non-2xx statuses.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// DNS resolution failed.
    DnsResolutionFailed { host: String },

    /// Request timed out.
    Timeout {
        operation: String,
        duration_secs: u64,
    },

    /// TLS/SSL error.
    TlsError { message: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by server.
    RateLimited { retry_after_secs: Option<u64> },

    /// The configured URL could not be used.
    InvalidUrl { url: String, message: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Build the error for a non-2xx response.
    ///
    /// 429 becomes [`NetworkError::RateLimited`], honouring a numeric
    /// `Retry-After` header when present.
    pub fn from_status(status: u16, retry_after: Option<&str>, body: &str) -> Self {
        if status == 429 {
            return NetworkError::RateLimited {
                retry_after_secs: retry_after.and_then(|v| v.trim().parse().ok()),
            };
        }
        NetworkError::HttpStatus {
            status,
            message: summarize_body(body),
        }
    }

    /// Classify a transport error raised by an [`crate::traits::HttpClient`].
    pub fn from_transport(err: HttpError, url: &str, timeout_secs: u64) -> Self {
        match err {
            HttpError::Timeout(_) => NetworkError::Timeout {
                operation: "film fetch".to_string(),
                duration_secs: timeout_secs,
            },
            HttpError::Cancelled => NetworkError::Cancelled,
            HttpError::InvalidUrl(message) => NetworkError::InvalidUrl {
                url: url.to_string(),
                message,
            },
            HttpError::ConnectionFailed(message) | HttpError::Other(message) => {
                let lower = message.to_lowercase();
                if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
                    NetworkError::TlsError { message }
                } else if lower.contains("dns") || lower.contains("resolve") {
                    NetworkError::DnsResolutionFailed {
                        host: extract_host_from_url(url),
                    }
                } else {
                    NetworkError::ConnectionFailed {
                        url: url.to_string(),
                        message,
                    }
                }
            }
        }
    }

    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::DnsResolutionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::TlsError { .. } => false,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::RateLimited { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the films server. Check your internet connection.".to_string()
            }
            NetworkError::DnsResolutionFailed { host } => {
                format!("Could not resolve '{}'. Check your internet connection or DNS settings.", host)
            }
            NetworkError::Timeout { duration_secs, .. } => {
                format!("The films server did not answer within {} seconds.", duration_secs)
            }
            NetworkError::TlsError { .. } => {
                "A secure connection to the films server could not be established.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The films endpoint was not found (HTTP 404).".to_string(),
                500..=599 => format!("The films server is having trouble (HTTP {}).", status),
                _ => format!("The films server returned HTTP {}.", status),
            },
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => format!("Too many requests. Wait {} seconds and retry.", secs),
                None => "Too many requests. Wait a moment and retry.".to_string(),
            },
            NetworkError::InvalidUrl { url, .. } => {
                format!("'{}' is not a usable films URL.", url)
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::DnsResolutionFailed { .. } => "E_NET_DNS",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::TlsError { .. } => "E_NET_TLS",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited { .. } => "E_NET_RATE",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::DnsResolutionFailed { host } => {
                write!(f, "DNS resolution failed for '{}'", host)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => write!(f, "{} timed out after {} seconds", operation, duration_secs),
            NetworkError::TlsError { message } => write!(f, "TLS error: {}", message),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            NetworkError::InvalidUrl { url, message } => {
                write!(f, "Invalid URL '{}': {}", url, message)
            }
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// First line of an error body, capped so it fits in a log line.
fn summarize_body(body: &str) -> String {
    const MAX_CHARS: usize = 120;
    let first = body.lines().next().unwrap_or("").trim();
    if first.chars().count() > MAX_CHARS {
        let cut: String = first.chars().take(MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}

/// Extract the host portion from a URL string.
fn extract_host_from_url(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    without_scheme
        .split(&['/', ':'][..])
        .next()
        .unwrap_or(url)
        .to_string()
}
