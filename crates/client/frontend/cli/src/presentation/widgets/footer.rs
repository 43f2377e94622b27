use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use client_frontend_core::view::Tone;

use crate::presentation::theme::DashboardTheme;

const HINTS: [(&str, &str); 5] = [
    ("Tab", "focus"),
    ("Enter", "select"),
    ("←/→", "change"),
    ("r", "refresh"),
    ("q", "quit"),
];

/// Key legend.
pub fn render(frame: &mut Frame, area: Rect, palette: &DashboardTheme) {
    let mut spans = Vec::with_capacity(HINTS.len() * 2);
    for (key, action) in HINTS {
        spans.push(Span::styled(format!(" {key} "), palette.tone(Tone::Accent)));
        spans.push(Span::styled(format!("{action}  "), palette.tone(Tone::Muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
