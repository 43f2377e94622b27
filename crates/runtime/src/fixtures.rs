//! Bundled dashboard data served when the remote source is unreachable.
use dashboard_core::{
    AmbulatoryMetrics, Dataset, ProcedureRecord, Record, SeriesPoint, Summary, SurgicalMetrics,
    VisitRecord,
};

use crate::api::DashboardData;

pub fn dashboard_data(dataset: Dataset) -> DashboardData {
    DashboardData {
        summary: Some(summary(dataset)),
        series: series(dataset),
        records: records(dataset),
    }
}

pub fn summary(dataset: Dataset) -> Summary {
    match dataset {
        Dataset::Ambulatory => Summary::Ambulatory(AmbulatoryMetrics {
            visits: 1824,
            avg_service_minutes: 43.0,
            resolution_rate: 0.86,
            returns: 214,
            trend: 0.04,
        }),
        Dataset::Surgical => Summary::Surgical(SurgicalMetrics {
            procedures: 348,
            occupancy: 0.78,
            avg_length_of_stay: 4.2,
            wait_days: 16.0,
            trend: -0.03,
        }),
    }
}

pub fn series(dataset: Dataset) -> Vec<SeriesPoint> {
    const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

    let values: [(f64, f64); 6] = match dataset {
        Dataset::Ambulatory => [
            (1320.0, 1200.0),
            (1480.0, 1300.0),
            (1586.0, 1350.0),
            (1624.0, 1400.0),
            (1702.0, 1450.0),
            (1824.0, 1500.0),
        ],
        Dataset::Surgical => [
            (246.0, 220.0),
            (258.0, 240.0),
            (292.0, 250.0),
            (310.0, 260.0),
            (328.0, 280.0),
            (348.0, 300.0),
        ],
    };

    MONTHS
        .iter()
        .zip(values)
        .map(|(month, (actual, target))| SeriesPoint::new(*month, actual, target))
        .collect()
}

pub fn records(dataset: Dataset) -> Vec<Record> {
    match dataset {
        Dataset::Ambulatory => vec![
            visit(
                "Maria Silva",
                "Cardiology",
                "Dr. João Alves",
                "2024-06-06",
                "Completed",
            ),
            visit(
                "Bruno Lima",
                "Endocrinology",
                "Dra. Fernanda Rocha",
                "2024-06-06",
                "In progress",
            ),
        ],
        Dataset::Surgical => vec![
            procedure(
                "Ana Souza",
                "Cholecystectomy",
                "Team 3",
                "2024-06-05",
                "Scheduled",
            ),
            procedure(
                "Carlos Mendes",
                "Hernia repair",
                "Team 1",
                "2024-06-05",
                "Recovery",
            ),
        ],
    }
}

fn visit(patient: &str, specialty: &str, professional: &str, date: &str, status: &str) -> Record {
    Record::Visit(VisitRecord {
        patient: patient.into(),
        specialty: specialty.into(),
        professional: professional.into(),
        date: date.into(),
        status: status.into(),
    })
}

fn procedure(patient: &str, procedure: &str, team: &str, date: &str, status: &str) -> Record {
    Record::Procedure(ProcedureRecord {
        patient: patient.into(),
        procedure: procedure.into(),
        team: team.into(),
        date: date.into(),
        status: status.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fixtures_match_their_dataset() {
        for dataset in Dataset::iter() {
            let data = dashboard_data(dataset);
            assert_eq!(data.summary.as_ref().map(Summary::dataset), Some(dataset));
            assert_eq!(data.series.len(), 6);
            assert!(data.records.iter().all(|record| match (dataset, record) {
                (Dataset::Ambulatory, Record::Visit(_)) => true,
                (Dataset::Surgical, Record::Procedure(_)) => true,
                _ => false,
            }));
        }
    }
}
