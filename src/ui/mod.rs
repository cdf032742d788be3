//! UI rendering.
//!
//! [`render`] draws whichever screen the app is on. Rendering may update
//! view-derived state (list selection offset, viewport rows, clamped detail
//! scroll), hence `&mut App`.

mod film_detail;
mod film_list;
pub mod helpers;
mod theme;

pub use film_list::{film_row, LINES_PER_ROW};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CRAWL, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SPINNER,
};

use ratatui::Frame;

use crate::app::{App, Screen};
use film_detail::render_film_detail;
use film_list::render_film_list;

/// Render the current screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    if let Screen::FilmDetail(detail) = &mut app.screen {
        render_film_detail(frame, detail);
    } else {
        render_film_list(frame, app);
    }
}
