//! List presenter: binds films to the list screen and turns row activation
//! into [`FilmSelected`] events.

use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::models::{Film, FilmDetailParams};

/// Emitted when a row is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmSelected {
    /// Row index that was activated
    pub position: usize,
    /// Payload for the detail screen
    pub params: FilmDetailParams,
}

/// Owns the bound films and the list selection.
///
/// The event sender is fixed at construction; consumers read the other end
/// of the channel.
#[derive(Debug)]
pub struct FilmListPresenter {
    films: Vec<Film>,
    state: ListState,
    events: mpsc::UnboundedSender<FilmSelected>,
}

impl FilmListPresenter {
    pub fn new(events: mpsc::UnboundedSender<FilmSelected>) -> Self {
        Self {
            films: Vec::new(),
            state: ListState::default(),
            events,
        }
    }

    /// Replace the whole visible set. Selection resets to the first row.
    pub fn bind(&mut self, films: Vec<Film>) {
        self.films = films;
        let selected = if self.films.is_empty() { None } else { Some(0) };
        self.state = ListState::default();
        self.state.select(selected);
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_film(&self) -> Option<&Film> {
        self.selected().and_then(|i| self.films.get(i))
    }

    /// Selection state for the list widget.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn select_previous(&mut self) {
        self.move_by(-1);
    }

    pub fn page_down(&mut self, rows: usize) {
        self.move_by(rows as isize);
    }

    pub fn page_up(&mut self, rows: usize) {
        self.move_by(-(rows as isize));
    }

    pub fn select_first(&mut self) {
        if !self.films.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.films.is_empty() {
            self.state.select(Some(self.films.len() - 1));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.films.is_empty() {
            return;
        }
        let last = self.films.len() - 1;
        let current = self.state.selected().unwrap_or(0);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize).min(last)
        };
        self.state.select(Some(next));
    }

    /// Activate the row at `position`.
    ///
    /// Returns `false` (and emits nothing) when the position is out of range
    /// or nobody is listening.
    pub fn activate(&mut self, position: usize) -> bool {
        let Some(film) = self.films.get(position) else {
            return false;
        };
        self.state.select(Some(position));
        let event = FilmSelected {
            position,
            params: film.detail_params(),
        };
        tracing::debug!(position, title = %event.params.title, "film row activated");
        self.events.send(event).is_ok()
    }

    /// Activate the selected row, if any.
    pub fn activate_selected(&mut self) -> bool {
        match self.selected() {
            Some(position) => self.activate(position),
            None => false,
        }
    }
}
