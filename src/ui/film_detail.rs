//! The film detail screen: title and opening crawl.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::DetailScreen;

use super::helpers::normalize_newlines;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CRAWL, COLOR_DIM};

pub fn render_film_detail(frame: &mut Frame, detail: &mut DetailScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Crawl
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(Span::styled(
            format!(" {} ", detail.params().title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center);
    let inner = block.inner(chunks[0]);

    let crawl = normalize_newlines(&detail.params().opening_crawl);
    let text = if crawl.trim().is_empty() {
        Text::from(Span::styled(
            "No opening crawl.",
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        Text::styled(crawl, Style::default().fg(COLOR_CRAWL))
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    // Counted before the block is attached so borders are not included.
    let content_lines = paragraph.line_count(inner.width);
    detail.clamp_scroll(
        u16::try_from(content_lines).unwrap_or(u16::MAX),
        inner.height,
    );
    let paragraph = paragraph.block(block).scroll((detail.scroll, 0));
    frame.render_widget(paragraph, chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " ↑↓ scroll · esc back · q quit",
            Style::default().fg(COLOR_DIM),
        )),
        chunks[1],
    );
}
