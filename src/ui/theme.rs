use crate::stations::DEFAULT_COLOR;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn station_name() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn price() -> Style {
        Style::default().fg(DEFAULT_COLOR).add_modifier(Modifier::BOLD)
    }

    pub fn distance() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn detail() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn selected_row() -> Style {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }

    pub fn sort_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn sort_inactive() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn empty_message() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }
}
