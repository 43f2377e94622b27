use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    widgets::{Cell, Row, Table as TableWidget},
};

use client_frontend_core::view::{Table, Tone};

use crate::presentation::theme::DashboardTheme;

pub fn render(frame: &mut Frame, area: Rect, table: &Table, palette: &DashboardTheme) {
    let header = Row::new(table.headers.iter().map(|header| Cell::from(header.as_str())))
        .style(palette.tone(Tone::Accent).add_modifier(Modifier::BOLD));

    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

    let widths = vec![Constraint::Fill(1); table.headers.len().max(1)];
    let widget = TableWidget::new(rows, widths)
        .header(header)
        .style(palette.tone(Tone::Normal))
        .column_spacing(2);

    frame.render_widget(widget, area);
}
