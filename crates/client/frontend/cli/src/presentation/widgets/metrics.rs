use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Paragraph},
};

use client_frontend_core::view::{MetricCard, Tone};

use crate::presentation::theme::DashboardTheme;

/// One bordered card per metric, side by side.
pub fn render(frame: &mut Frame, area: Rect, cards: &[MetricCard], palette: &DashboardTheme) {
    if cards.is_empty() {
        return;
    }

    let areas = Layout::horizontal(cards.iter().map(|_| Constraint::Fill(1))).split(area);
    for (card, card_area) in cards.iter().zip(areas.iter()) {
        let lines = vec![
            Line::styled(
                card.value.clone(),
                palette.tone(Tone::Normal).add_modifier(Modifier::BOLD),
            ),
            Line::styled(card.trend.text.clone(), palette.trend(card.trend.direction)),
        ];
        let block = Block::bordered()
            .title(card.label.as_str())
            .title_style(palette.tone(Tone::Muted))
            .border_style(palette.border(false));
        frame.render_widget(Paragraph::new(lines).block(block), *card_area);
    }
}
