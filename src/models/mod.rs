//! Data models.

mod film;

pub use film::{parse_films, Film, FilmDetailParams};
