use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart as ChartWidget, Dataset as ChartSeries, GraphType, Paragraph},
};

use client_frontend_core::view::{Chart, Tone};

use crate::presentation::theme::DashboardTheme;

/// Line chart with one x position per label. Dashed lines are drawn with
/// sparse dots since terminals have no dash pattern.
pub fn render(frame: &mut Frame, area: Rect, chart: &Chart, palette: &DashboardTheme) {
    if chart.labels.is_empty() {
        frame.render_widget(
            Paragraph::new("No data for this period.").style(palette.tone(Tone::Muted)),
            area,
        );
        return;
    }

    let points: Vec<Vec<(f64, f64)>> = chart
        .lines
        .iter()
        .map(|line| {
            line.values
                .iter()
                .enumerate()
                .map(|(index, value)| (index as f64, *value))
                .collect()
        })
        .collect();

    let series: Vec<ChartSeries> = chart
        .lines
        .iter()
        .zip(&points)
        .map(|(line, data)| {
            ChartSeries::default()
                .name(line.name.clone())
                .marker(if line.dashed { Marker::Dot } else { Marker::Braille })
                .graph_type(GraphType::Line)
                .style(Style::default().fg(DashboardTheme::rgb(line.color)))
                .data(data)
        })
        .collect();

    let upper = y_upper_bound(chart);
    let x_max = chart.labels.len().saturating_sub(1).max(1) as f64;
    let muted = palette.tone(Tone::Muted);

    let widget = ChartWidget::new(series)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .style(muted)
                .labels(chart.labels.iter().map(|label| Span::styled(label.clone(), muted))),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, upper])
                .style(muted)
                .labels([
                    "0".to_string(),
                    format!("{:.0}", upper / 2.0),
                    format!("{upper:.0}"),
                ]),
        );

    frame.render_widget(widget, area);
}

/// Largest value plus 10% headroom, never below 1.
fn y_upper_bound(chart: &Chart) -> f64 {
    let max = chart
        .lines
        .iter()
        .flat_map(|line| line.values.iter().copied())
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        (max + max / 10.0).ceil()
    } else {
        1.0
    }
}
