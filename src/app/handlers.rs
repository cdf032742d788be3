//! Applying background results to app state.

use super::{App, AppMessage, LoadState};

impl App {
    /// Apply a message from a background task.
    ///
    /// Messages from a retired generation are ignored. Returns whether the
    /// message was applied.
    pub fn handle_message(&mut self, message: AppMessage) -> bool {
        if message.generation() != self.generation {
            tracing::debug!(
                stale = message.generation(),
                current = self.generation,
                "ignoring result of superseded fetch"
            );
            return false;
        }
        self.fetch_task = None;

        match message {
            AppMessage::FilmsLoaded { films, .. } => {
                tracing::info!(count = films.len(), "binding films to list");
                self.presenter.bind(films);
                self.load_state = LoadState::Loaded;
            }
            AppMessage::FilmsFailed { error, .. } => {
                self.presenter.bind(Vec::new());
                self.load_state = LoadState::Failed {
                    message: error.user_message(),
                    retryable: error.is_retryable(),
                };
            }
        }

        self.spinner.hide();
        self.mark_dirty();
        true
    }
}
