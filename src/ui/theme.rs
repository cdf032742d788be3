//! Color theme constants.

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent for the selected row and titles
pub const COLOR_ACCENT: Color = Color::Yellow;

/// Header text
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text: director, year, key hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Opening crawl text
pub const COLOR_CRAWL: Color = Color::Rgb(229, 177, 58);

/// Error message
pub const COLOR_ERROR: Color = Color::Red;

/// Spinner
pub const COLOR_SPINNER: Color = Color::Cyan;
