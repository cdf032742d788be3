//! The film fetcher: one GET against the films endpoint, decoded into an
//! ordered `Vec<Film>`.

use std::time::Instant;

use crate::error::{FetchResult, NetworkError};
use crate::models::{parse_films, Film};
use crate::traits::{Headers, HttpClient};

/// Issues the films request through any [`HttpClient`].
///
/// There are no retries here; a failed fetch is reported and the caller
/// decides whether to try again.
#[derive(Debug, Clone)]
pub struct FilmFetcher<C: HttpClient> {
    client: C,
    url: String,
    timeout_secs: u64,
}

impl<C: HttpClient> FilmFetcher<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            timeout_secs: crate::startup::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Record the client's timeout so timeout errors report it accurately.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Fetch and decode the film listing.
    pub async fn fetch(&self) -> FetchResult<Vec<Film>> {
        let started = Instant::now();
        tracing::info!(url = %self.url, "fetching films");

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .client
            .get(&self.url, &headers)
            .await
            .map_err(|e| e.into_network_error(&self.url, self.timeout_secs))?;

        if !response.is_success() {
            let retry_after = response
                .headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("retry-after"))
                .map(|(_, v)| v.as_str());
            let err = NetworkError::from_status(response.status, retry_after, &response.text_lossy());
            tracing::warn!(status = response.status, code = err.error_code(), "films request rejected");
            return Err(err.into());
        }

        let films = parse_films(&response.body)?;
        tracing::info!(
            count = films.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "films fetched"
        );
        Ok(films)
    }
}
