//! Value types describing the dashboard state.
//!
//! Every type here is an owned value: `Clone` produces a fully independent
//! copy, which is what lets the store hand out snapshots without aliasing.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected filter values keyed by filter name.
///
/// Keys depend on the active dataset and are never validated by the store.
pub type Filters = BTreeMap<String, String>;

/// Indicator domain currently displayed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Dataset {
    /// Outpatient visits.
    #[default]
    Ambulatory,
    /// Surgical procedures and bed usage.
    Surgical,
}

impl Dataset {
    /// Human-readable name used by the header chips.
    pub const fn label(self) -> &'static str {
        match self {
            Dataset::Ambulatory => "Ambulatory",
            Dataset::Surgical => "Surgical",
        }
    }
}

/// Presentation mode, orthogonal to [`Dataset`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Standard,
    /// High-contrast palette for night shifts.
    OnCall,
}

impl Theme {
    pub const fn label(self) -> &'static str {
        match self {
            Theme::Standard => "Standard theme",
            Theme::OnCall => "On-call theme",
        }
    }
}

/// Dataset-specific headline metrics.
///
/// Payloads are distinguished by shape: an ambulatory summary always carries
/// `visits`, a surgical one always carries `procedures`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Summary {
    Ambulatory(AmbulatoryMetrics),
    Surgical(SurgicalMetrics),
}

impl Summary {
    pub fn dataset(&self) -> Dataset {
        match self {
            Summary::Ambulatory(_) => Dataset::Ambulatory,
            Summary::Surgical(_) => Dataset::Surgical,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbulatoryMetrics {
    pub visits: u64,
    #[serde(default)]
    pub avg_service_minutes: f64,
    /// Fraction in `0.0..=1.0`.
    #[serde(default)]
    pub resolution_rate: f64,
    #[serde(default)]
    pub returns: u64,
    /// Month-over-month change as a fraction (`0.04` = +4%).
    #[serde(default)]
    pub trend: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgicalMetrics {
    pub procedures: u64,
    /// Bed occupancy as a fraction in `0.0..=1.0`.
    #[serde(default)]
    pub occupancy: f64,
    #[serde(default)]
    pub avg_length_of_stay: f64,
    #[serde(default)]
    pub wait_days: f64,
    #[serde(default)]
    pub trend: f64,
}

/// One time bucket of the production chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub actual: f64,
    pub target: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, actual: f64, target: f64) -> Self {
        Self {
            label: label.into(),
            actual,
            target,
        }
    }
}

/// A row of the records table. The shape follows the dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Visit(VisitRecord),
    Procedure(ProcedureRecord),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub patient: String,
    pub specialty: String,
    pub professional: String,
    /// ISO date as sent by the source; formatting is left to the view.
    pub date: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    pub patient: String,
    pub procedure: String,
    pub team: String,
    pub date: String,
    pub status: String,
}

/// Full application state at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub dataset: Dataset,
    pub theme: Theme,
    pub filters: Filters,
    pub summary: Option<Summary>,
    pub series: Vec<SeriesPoint>,
    pub records: Vec<Record>,
    pub loading: bool,
}

impl Default for Snapshot {
    /// State at application start: nothing loaded yet, refresh pending.
    fn default() -> Self {
        Self {
            dataset: Dataset::default(),
            theme: Theme::default(),
            filters: Filters::new(),
            summary: None,
            series: Vec::new(),
            records: Vec::new(),
            loading: true,
        }
    }
}
