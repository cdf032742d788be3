//! AppMessage enum for results coming back from background tasks.

use crate::error::FetchError;
use crate::models::Film;

/// Messages delivered to the event loop from spawned tasks.
///
/// Each carries the generation of the fetch that produced it so results
/// from a superseded fetch can be dropped.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The film listing arrived
    FilmsLoaded { generation: u64, films: Vec<Film> },
    /// The fetch failed
    FilmsFailed { generation: u64, error: FetchError },
}

impl AppMessage {
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::FilmsLoaded { generation, .. } => *generation,
            AppMessage::FilmsFailed { generation, .. } => *generation,
        }
    }
}
