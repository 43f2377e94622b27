//! Ratatui palette derived from the active theme and dataset.
//!
//! Views only carry semantic [`Tone`]s; this module decides the colors.

use client_frontend_core::view::{Rgb, Tone, TrendDirection};
use dashboard_core::{Dataset, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Concrete colors for one (theme, dataset) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardTheme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub positive: Color,
    pub negative: Color,
}

impl DashboardTheme {
    pub fn new(theme: Theme, dataset: Dataset) -> Self {
        match theme {
            Theme::Standard => Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: match dataset {
                    Dataset::Ambulatory => Color::Rgb(0x25, 0x63, 0xeb),
                    Dataset::Surgical => Color::Rgb(0x16, 0xa3, 0x4a),
                },
                border: Color::Gray,
                positive: Color::Green,
                negative: Color::Red,
            },
            Theme::OnCall => Self {
                background: Color::Rgb(0x0f, 0x17, 0x2a),
                text: Color::Rgb(0xe2, 0xe8, 0xf0),
                muted: Color::Rgb(0x94, 0xa3, 0xb8),
                accent: match dataset {
                    Dataset::Ambulatory => Color::Rgb(0x60, 0xa5, 0xfa),
                    Dataset::Surgical => Color::Rgb(0x4a, 0xde, 0x80),
                },
                border: Color::Rgb(0x33, 0x41, 0x55),
                positive: Color::Rgb(0x4a, 0xde, 0x80),
                negative: Color::Rgb(0xf8, 0x71, 0x71),
            },
        }
    }

    pub fn rgb(color: Rgb) -> Color {
        let Rgb(r, g, b) = color;
        Color::Rgb(r, g, b)
    }

    /// Base style filling the whole screen.
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn tone(&self, tone: Tone) -> Style {
        let style = Style::default();
        match tone {
            Tone::Normal => style.fg(self.text),
            Tone::Muted => style.fg(self.muted),
            Tone::Accent => style.fg(self.accent).add_modifier(Modifier::BOLD),
            Tone::Positive => style.fg(self.positive),
            Tone::Negative => style.fg(self.negative),
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn chip(&self, active: bool, focused: bool) -> Style {
        let mut style = if active {
            Style::default()
                .fg(self.background_or_black())
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        };
        if focused {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        style
    }

    pub fn trend(&self, direction: TrendDirection) -> Style {
        match direction {
            TrendDirection::Up => self.tone(Tone::Positive),
            TrendDirection::Down => self.tone(Tone::Negative),
            TrendDirection::Stable => self.tone(Tone::Muted),
        }
    }

    fn background_or_black(&self) -> Color {
        match self.background {
            Color::Reset => Color::Black,
            color => color,
        }
    }
}
