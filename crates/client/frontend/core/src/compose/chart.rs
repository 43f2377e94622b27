use dashboard_core::{Dataset, SeriesPoint};

use crate::view::{Chart, ChartLine, Rgb, ViewNode};

/// Primary (actual) and secondary (target) line colors per dataset.
pub const fn palette(dataset: Dataset) -> (Rgb, Rgb) {
    match dataset {
        Dataset::Ambulatory => (Rgb(0x25, 0x63, 0xeb), Rgb(0x0f, 0x76, 0x6e)),
        Dataset::Surgical => (Rgb(0x16, 0xa3, 0x4a), Rgb(0xf9, 0x73, 0x16)),
    }
}

/// Actual production against target, one point per series label.
pub fn production_chart(dataset: Dataset, series: &[SeriesPoint]) -> ViewNode {
    let (primary, secondary) = palette(dataset);
    let chart = Chart {
        labels: series.iter().map(|point| point.label.clone()).collect(),
        lines: vec![
            ChartLine {
                name: "Production".to_string(),
                values: series.iter().map(|point| point.actual).collect(),
                color: primary,
                dashed: false,
            },
            ChartLine {
                name: "Target".to_string(),
                values: series.iter().map(|point| point.target).collect(),
                color: secondary,
                dashed: true,
            },
        ],
    };

    ViewNode::Panel {
        title: "Monthly trend".to_string(),
        subtitle: Some("Actual production versus management target.".to_string()),
        children: vec![ViewNode::Chart(chart)],
    }
}
