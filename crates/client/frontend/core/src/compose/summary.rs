use dashboard_core::{AmbulatoryMetrics, Dataset, Summary, SurgicalMetrics};

use crate::{
    format,
    view::{MetricCard, ViewNode},
};

/// Headline metrics for `dataset`.
///
/// An absent summary, or one shaped for the other dataset, yields the
/// dataset's cards with zero values.
pub fn metric_cards(dataset: Dataset, summary: Option<&Summary>) -> Vec<MetricCard> {
    match dataset {
        Dataset::Ambulatory => {
            let metrics = match summary {
                Some(Summary::Ambulatory(metrics)) => metrics.clone(),
                _ => AmbulatoryMetrics::default(),
            };
            vec![
                card("Visits", format::count(metrics.visits), metrics.trend),
                card(
                    "Avg service time (min)",
                    format::decimal(metrics.avg_service_minutes),
                    0.0,
                ),
                card(
                    "Resolution rate",
                    format::percent(metrics.resolution_rate),
                    0.0,
                ),
                card("Returns", format::count(metrics.returns), 0.0),
            ]
        }
        Dataset::Surgical => {
            let metrics = match summary {
                Some(Summary::Surgical(metrics)) => metrics.clone(),
                _ => SurgicalMetrics::default(),
            };
            vec![
                card(
                    "Procedures",
                    format::count(metrics.procedures),
                    metrics.trend,
                ),
                card("Occupancy rate", format::percent(metrics.occupancy), 0.0),
                card(
                    "Avg length of stay (days)",
                    format::decimal(metrics.avg_length_of_stay),
                    0.0,
                ),
                card("Wait time (days)", format::decimal(metrics.wait_days), 0.0),
            ]
        }
    }
}

fn card(label: &str, value: String, trend: f64) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
        trend: format::trend(trend),
    }
}

pub fn summary_panel(dataset: Dataset, summary: Option<&Summary>) -> ViewNode {
    ViewNode::Panel {
        title: "Executive summary".to_string(),
        subtitle: Some("Key indicators tracked daily.".to_string()),
        children: vec![ViewNode::Metrics(metric_cards(dataset, summary))],
    }
}
