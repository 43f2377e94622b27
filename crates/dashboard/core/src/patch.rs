//! Partial snapshots merged into the store.
use crate::model::{Dataset, Filters, Record, SeriesPoint, Snapshot, Summary, Theme};

/// Partial record of [`Snapshot`] fields.
///
/// A present field replaces the stored one wholesale when merged; merging is
/// one level deep only. In particular `filters` is replaced, not unioned:
/// callers that want to keep sibling keys must copy the current map and
/// extend it (see [`Store::update_state`](crate::Store::update_state)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Patch {
    pub dataset: Option<Dataset>,
    pub theme: Option<Theme>,
    pub filters: Option<Filters>,
    /// `Some(None)` clears the summary.
    pub summary: Option<Option<Summary>>,
    pub series: Option<Vec<SeriesPoint>>,
    pub records: Option<Vec<Record>>,
    pub loading: Option<bool>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn summary(mut self, summary: Option<Summary>) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn series(mut self, series: Vec<SeriesPoint>) -> Self {
        self.series = Some(series);
        self
    }

    pub fn records(mut self, records: Vec<Record>) -> Self {
        self.records = Some(records);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Names of the fields this patch sets, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> {
        [
            ("dataset", self.dataset.is_some()),
            ("theme", self.theme.is_some()),
            ("filters", self.filters.is_some()),
            ("summary", self.summary.is_some()),
            ("series", self.series.is_some()),
            ("records", self.records.is_some()),
            ("loading", self.loading.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
    }
}

impl Snapshot {
    /// Shallow merge: `{...self, ...patch}`.
    pub fn merge(mut self, patch: Patch) -> Self {
        let Patch {
            dataset,
            theme,
            filters,
            summary,
            series,
            records,
            loading,
        } = patch;

        if let Some(dataset) = dataset {
            self.dataset = dataset;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(filters) = filters {
            self.filters = filters;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(series) = series {
            self.series = series;
        }
        if let Some(records) = records {
            self.records = records;
        }
        if let Some(loading) = loading {
            self.loading = loading;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_touches_only_present_fields() {
        let mut base = Snapshot::default();
        base.filters.insert("team".into(), "1".into());
        base.series.push(SeriesPoint::new("Jan", 1.0, 2.0));

        let merged = base.clone().merge(Patch::new().loading(false));

        assert!(!merged.loading);
        assert_eq!(merged.filters, base.filters);
        assert_eq!(merged.series, base.series);
        assert_eq!(merged.dataset, base.dataset);
    }

    #[test]
    fn merge_replaces_nested_filters_wholesale() {
        let mut base = Snapshot::default();
        base.filters.insert("team".into(), "1".into());

        let mut replacement = Filters::new();
        replacement.insert("specialty".into(), "Cardiology".into());
        let merged = base.merge(Patch::new().filters(replacement.clone()));

        assert_eq!(merged.filters, replacement);
    }

    #[test]
    fn summary_can_be_cleared() {
        let mut base = Snapshot::default();
        base.summary = Some(Summary::Ambulatory(Default::default()));

        let merged = base.merge(Patch::new().summary(None));
        assert!(merged.summary.is_none());
    }

    #[test]
    fn lists_present_fields() {
        let patch = Patch::new().dataset(Dataset::Surgical).loading(true);
        assert_eq!(patch.fields().collect::<Vec<_>>(), ["dataset", "loading"]);
        assert!(!patch.is_empty());
        assert!(Patch::new().is_empty());
    }
}
