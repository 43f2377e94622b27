use chrono::{DateTime, NaiveDate};
use dashboard_core::{Dataset, Record};

use crate::view::{Table, Tone, ViewNode};

pub const EMPTY_TEXT: &str = "No records found for the selected filters.";

fn headers(dataset: Dataset) -> [&'static str; 5] {
    match dataset {
        Dataset::Ambulatory => ["Patient", "Specialty", "Professional", "Date", "Status"],
        Dataset::Surgical => ["Patient", "Procedure", "Team", "Date", "Status"],
    }
}

/// Formats an ISO date as `06 Jun 2024`. Text that is not a date is
/// returned unchanged.
pub fn format_date(value: &str) -> String {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value.trim())
                .ok()
                .map(|timestamp| timestamp.date_naive())
        });

    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => value.to_string(),
    }
}

fn cells(record: &Record) -> Vec<String> {
    match record {
        Record::Visit(visit) => vec![
            visit.patient.clone(),
            visit.specialty.clone(),
            visit.professional.clone(),
            format_date(&visit.date),
            visit.status.clone(),
        ],
        Record::Procedure(procedure) => vec![
            procedure.patient.clone(),
            procedure.procedure.clone(),
            procedure.team.clone(),
            format_date(&procedure.date),
            procedure.status.clone(),
        ],
    }
}

pub fn records_table(dataset: Dataset, records: &[Record], max_rows: usize) -> ViewNode {
    let mut children = Vec::new();

    if records.is_empty() {
        children.push(ViewNode::toned(EMPTY_TEXT, Tone::Muted));
    } else {
        children.push(ViewNode::Table(Table {
            headers: headers(dataset).iter().map(|h| h.to_string()).collect(),
            rows: records.iter().take(max_rows).map(cells).collect(),
        }));
        if records.len() > max_rows {
            children.push(ViewNode::toned(
                format!("Showing {max_rows} of {} records.", records.len()),
                Tone::Muted,
            ));
        }
    }

    ViewNode::Panel {
        title: "Recent activity".to_string(),
        subtitle: Some("Sample of the latest entries recorded in the source.".to_string()),
        children,
    }
}
