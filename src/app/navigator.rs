//! Detail navigator: the single consumer of [`FilmSelected`] events.

use tokio::sync::mpsc;

use super::presenter::FilmSelected;
use super::types::{DetailScreen, Screen};

/// Create the presenter → navigator channel.
pub fn selection_channel() -> (mpsc::UnboundedSender<FilmSelected>, DetailNavigator) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, DetailNavigator { rx })
}

#[derive(Debug)]
pub struct DetailNavigator {
    rx: mpsc::UnboundedReceiver<FilmSelected>,
}

impl DetailNavigator {
    /// Consume every pending selection and return the screen for the most
    /// recent one.
    pub fn drain(&mut self) -> Option<Screen> {
        let mut last = None;
        while let Ok(event) = self.rx.try_recv() {
            last = Some(event);
        }
        last.map(|event| {
            tracing::debug!(position = event.position, "opening film detail");
            Screen::FilmDetail(DetailScreen::new(event.params))
        })
    }
}
