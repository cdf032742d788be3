//! The film list screen.
//!
//! Header with the film count, then one of: spinner, error with retry hint,
//! empty notice, or the list itself (two lines per film: title, then
//! director and year).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, LoadState};
use crate::models::Film;

use super::helpers::truncate_to_width;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SPINNER,
};

/// Lines each film occupies in the list
pub const LINES_PER_ROW: usize = 2;

const HIGHLIGHT_SYMBOL: &str = "▌ ";

pub fn render_film_list(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let body = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    match app.load_state.clone() {
        LoadState::Loading => render_loading(frame, body, app),
        LoadState::Failed { message, retryable } => {
            render_failure(frame, body, &message, retryable)
        }
        LoadState::Loaded if app.presenter.is_empty() => render_empty(frame, body),
        LoadState::Loaded => render_rows(frame, body, app),
    }

    render_hints(frame, chunks[2], &app.load_state);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " films",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if app.load_state == LoadState::Loaded {
        spans.push(Span::styled(
            format!("  {}", app.presenter.len()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    if !app.spinner.is_visible() {
        return;
    }
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", app.spinner.glyph()),
            Style::default().fg(COLOR_SPINNER),
        ),
        Span::raw("Loading films..."),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_failure(frame: &mut Frame, area: Rect, message: &str, retryable: bool) {
    let hint = if retryable {
        "Press r to retry."
    } else {
        "Press r to try again, or q to quit."
    };
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(COLOR_ERROR))),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled("No films found.", Style::default().fg(COLOR_DIM))),
        area,
    );
}

/// Build the two lines of one film row.
pub fn film_row(film: &Film, width: usize) -> ListItem<'static> {
    let subtitle = match (film.director.is_empty(), film.release_year()) {
        (true, year) => year,
        (false, year) if year.is_empty() => film.director.clone(),
        (false, year) => format!("{} · {}", film.director, year),
    };
    ListItem::new(vec![
        Line::from(Span::styled(
            truncate_to_width(&film.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&subtitle, width),
            Style::default().fg(COLOR_DIM),
        )),
    ])
}

fn render_rows(frame: &mut Frame, area: Rect, app: &mut App) {
    app.list_viewport_rows = (area.height as usize / LINES_PER_ROW).max(1);
    let width = (area.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());

    let items: Vec<ListItem> = app
        .presenter
        .films()
        .iter()
        .map(|film| film_row(film, width))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(COLOR_ACCENT))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, area, app.presenter.list_state_mut());
}

fn render_hints(frame: &mut Frame, area: Rect, state: &LoadState) {
    let hints = match state {
        LoadState::Loading => " q quit",
        LoadState::Failed { .. } => " r retry · q quit",
        LoadState::Loaded => " ↑↓ move · enter open · q quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
