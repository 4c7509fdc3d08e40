//! TUI Theme
//!
//! Warm tea-house palette: amber accents on muted browns.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent - amber
pub const ACCENT: Color = Color::Rgb(222, 170, 90);

/// Butler's replies - soft cream
pub const BUTLER: Color = Color::Rgb(235, 225, 200);

/// Guest's messages - pale teal
pub const GUEST: Color = Color::Rgb(120, 190, 190);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(110, 100, 95);

/// Border color - subtle brown
pub const BORDER: Color = Color::Rgb(90, 75, 65);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn guest_prefix() -> Style {
    Style::default().fg(GUEST).add_modifier(Modifier::BOLD)
}

pub fn butler_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn butler_text() -> Style {
    Style::default().fg(BUTLER)
}

/// Thinking indicator
pub fn loading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC)
}

/// Closed-panel launcher badge
pub fn launcher() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(ACCENT)
}

pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
