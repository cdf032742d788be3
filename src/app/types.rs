//! Screen and load-state types.

use crate::models::FilmDetailParams;

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// The scrollable film list
    #[default]
    FilmList,
    /// One film's title and opening crawl
    FilmDetail(DetailScreen),
}

/// State of the detail screen, built from the typed parameters it was
/// opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    params: FilmDetailParams,
    /// Vertical scroll offset into the crawl, in lines
    pub scroll: u16,
}

impl DetailScreen {
    pub fn new(params: FilmDetailParams) -> Self {
        Self { params, scroll: 0 }
    }

    pub fn params(&self) -> &FilmDetailParams {
        &self.params
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Keep the scroll offset inside content of `content_lines` shown in a
    /// viewport `viewport` lines tall.
    pub fn clamp_scroll(&mut self, content_lines: u16, viewport: u16) {
        let max = content_lines.saturating_sub(viewport);
        self.scroll = self.scroll.min(max);
    }
}

/// Progress of the film fetch for the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// A fetch is in flight
    #[default]
    Loading,
    /// Films are bound to the list (possibly zero of them)
    Loaded,
    /// The last fetch failed; `message` is shown in place of the list
    Failed { message: String, retryable: bool },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Loading indicator shown while a fetch is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    visible: bool,
    frame: usize,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self {
            visible: true,
            frame: 0,
        }
    }
}

impl LoadingIndicator {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.frame = 0;
    }

    /// Hide the indicator. Returns `true` only on the visible → hidden
    /// transition.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Advance the animation; no-op while hidden.
    pub fn tick(&mut self) {
        if self.visible {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn glyph(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }
}
