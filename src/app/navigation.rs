//! Keyboard handling and screen transitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};

/// Lines scrolled per PageUp/PageDown on the detail screen.
const DETAIL_PAGE_LINES: u16 = 10;

impl App {
    /// Dispatch a key press to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::FilmList => self.handle_list_key(key.code),
            Screen::FilmDetail(_) => self.handle_detail_key(key.code),
        }
        self.mark_dirty();
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let page = self.list_viewport_rows.max(1);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.presenter.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.presenter.select_previous(),
            KeyCode::PageDown => self.presenter.page_down(page),
            KeyCode::PageUp => self.presenter.page_up(page),
            KeyCode::Home | KeyCode::Char('g') => self.presenter.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.presenter.select_last(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                self.open_selected();
            }
            KeyCode::Char('r') => {
                self.retry();
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        if let Screen::FilmDetail(detail) = &mut self.screen {
            match code {
                KeyCode::Down | KeyCode::Char('j') => detail.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => detail.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => detail.scroll_down(DETAIL_PAGE_LINES),
                KeyCode::PageUp => detail.scroll_up(DETAIL_PAGE_LINES),
                KeyCode::Home | KeyCode::Char('g') => detail.scroll = 0,
                _ => {}
            }
        }
        match code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                self.navigate_back();
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Activate the selected row and follow the resulting navigation.
    pub fn open_selected(&mut self) -> bool {
        self.presenter.activate_selected() && self.route_navigation()
    }

    /// Activate row `position` and follow the resulting navigation.
    pub fn open_position(&mut self, position: usize) -> bool {
        self.presenter.activate(position) && self.route_navigation()
    }

    /// Let the navigator consume pending selections.
    pub fn route_navigation(&mut self) -> bool {
        match self.navigator.drain() {
            Some(screen) => {
                self.screen = screen;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Return from the detail screen to the list, keeping the selection.
    pub fn navigate_back(&mut self) {
        if matches!(self.screen, Screen::FilmDetail(_)) {
            tracing::debug!("back to film list");
            self.screen = Screen::FilmList;
            self.mark_dirty();
        }
    }
}
