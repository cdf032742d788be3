//! Background film fetch bound to the list screen's lifetime.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::fetcher::FilmFetcher;
use crate::traits::HttpClient;

/// Handle to an in-flight fetch.
///
/// Dropping the handle aborts the task, so a screen that is torn down (or a
/// fetch that is superseded by a retry) never gets a late result.
#[derive(Debug)]
pub struct FetchTask {
    generation: u64,
    handle: JoinHandle<()>,
}

impl FetchTask {
    /// Spawn a fetch on the current tokio runtime.
    ///
    /// The result is sent as an [`AppMessage`] tagged with `generation`. A
    /// closed channel means the receiver is gone and the result is dropped.
    pub fn spawn<C>(
        fetcher: Arc<FilmFetcher<C>>,
        generation: u64,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self
    where
        C: HttpClient + 'static,
    {
        let handle = tokio::spawn(async move {
            let message = match fetcher.fetch().await {
                Ok(films) => AppMessage::FilmsLoaded { generation, films },
                Err(error) => {
                    tracing::warn!(
                        generation,
                        code = error.error_code(),
                        "film fetch failed: {}",
                        error
                    );
                    AppMessage::FilmsFailed { generation, error }
                }
            };
            if tx.send(message).is_err() {
                tracing::debug!(generation, "fetch result dropped, receiver closed");
            }
        });

        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the fetch now instead of waiting for drop.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!(generation = self.generation, "aborting in-flight fetch");
            self.handle.abort();
        }
    }
}
