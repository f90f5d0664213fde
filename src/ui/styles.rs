use crate::domain::Accent;
use ratatui::style::{Color, Modifier, Style};

/// Terminal color for a mode accent
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::LightBlue,
        Accent::Green => Color::LightGreen,
        Accent::Yellow => Color::Yellow,
    }
}

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Large clock digits, tinted with the mode accent
pub fn clock_style(accent: Accent) -> Style {
    Style::default()
        .fg(accent_color(accent))
        .add_modifier(Modifier::BOLD)
}

/// Progress gauge style
pub fn gauge_style(accent: Accent) -> Style {
    Style::default().fg(accent_color(accent)).bg(Color::DarkGray)
}

/// Active mode tab
pub fn active_tab_style(accent: Accent) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(accent_color(accent))
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Check mark on completed rows
pub fn check_style() -> Style {
    Style::default().fg(Color::Green)
}
