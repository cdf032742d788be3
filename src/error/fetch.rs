//! Errors surfaced by a film fetch.

use thiserror::Error;

use super::network::NetworkError;

/// Everything that can go wrong between issuing the GET and holding a
/// `Vec<Film>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a usable response.
    #[error("{0}")]
    Network(#[from] NetworkError),

    /// The body arrived but is not a film listing.
    #[error("Malformed film listing: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Build a decode error from a serde failure.
    pub fn decode(err: &serde_json::Error) -> Self {
        FetchError::Decode {
            message: err.to_string(),
        }
    }

    /// Whether pressing retry has a reasonable chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(err) => err.is_retryable(),
            FetchError::Decode { .. } => false,
        }
    }

    /// Message shown in the list area when the fetch fails.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(err) => err.user_message(),
            FetchError::Decode { .. } => {
                "The films server sent a response that could not be read.".to_string()
            }
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network(err) => err.error_code(),
            FetchError::Decode { .. } => "E_FETCH_DECODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_delegates() {
        let err: FetchError = NetworkError::Timeout {
            operation: "film fetch".to_string(),
            duration_secs: 15,
        }
        .into();
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
        assert_eq!(err.to_string(), "film fetch timed out after 15 seconds");
    }

    #[test]
    fn test_decode_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::decode(&serde_err);
        assert!(!err.is_retryable());
        assert_eq!(err.error_code(), "E_FETCH_DECODE");
        assert!(err.to_string().starts_with("Malformed film listing:"));
        assert!(err.user_message().contains("could not be read"));
    }
}
