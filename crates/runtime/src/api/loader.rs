//! Asynchronous abstraction for sourcing dashboard data.
//!
//! The action layer only ever talks to a [`DataLoader`]; the HTTP client,
//! the bundled fixtures and the fallback wrapper are interchangeable
//! implementations.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dashboard_core::{Dataset, Filters, Record, SeriesPoint, Summary};

use super::errors::Result;
use crate::fixtures;

/// Payload produced by a loader for one dataset/filter combination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Source of dashboard data.
///
/// Implementations run on the dashboard's local task set, so the returned
/// futures need not be `Send`.
#[async_trait(?Send)]
pub trait DataLoader {
    /// Load the data for `dataset` narrowed by `filters`.
    ///
    /// The caller treats any `Ok` value as authoritative and performs no
    /// validation of its contents.
    async fn load(&self, dataset: Dataset, filters: &Filters) -> Result<DashboardData>;
}

/// Serves the bundled fixtures, ignoring filters. Never fails.
///
/// Used in offline mode and as the fallback source.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureLoader;

#[async_trait(?Send)]
impl DataLoader for FixtureLoader {
    async fn load(&self, dataset: Dataset, _filters: &Filters) -> Result<DashboardData> {
        Ok(fixtures::dashboard_data(dataset))
    }
}

/// Wraps a loader so that failures resolve with bundled fixtures instead.
///
/// This is the contract the action layer expects from its collaborator:
/// resolve, never reject. The wrapped error is logged at `warn`.
#[derive(Debug)]
pub struct FallbackLoader<L> {
    inner: L,
}

impl<L> FallbackLoader<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait(?Send)]
impl<L> DataLoader for FallbackLoader<L>
where
    L: DataLoader,
{
    async fn load(&self, dataset: Dataset, filters: &Filters) -> Result<DashboardData> {
        match self.inner.load(dataset, filters).await {
            Ok(data) => Ok(data),
            Err(error) => {
                tracing::warn!(
                    %dataset,
                    error = %error,
                    "dashboard source failed, serving bundled data"
                );
                Ok(fixtures::dashboard_data(dataset))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LoadError;

    struct Offline;

    #[async_trait(?Send)]
    impl DataLoader for Offline {
        async fn load(&self, _dataset: Dataset, _filters: &Filters) -> Result<DashboardData> {
            Err(LoadError::Unavailable("no network".into()))
        }
    }

    #[tokio::test]
    async fn fallback_resolves_with_fixtures_on_error() {
        let loader = FallbackLoader::new(Offline);
        let data = loader
            .load(Dataset::Surgical, &Filters::new())
            .await
            .expect("fallback never fails");
        assert_eq!(data, fixtures::dashboard_data(Dataset::Surgical));
    }

    #[tokio::test]
    async fn fallback_passes_through_success() {
        let loader = FallbackLoader::new(FixtureLoader);
        let data = loader
            .load(Dataset::Ambulatory, &Filters::new())
            .await
            .unwrap();
        assert_eq!(data, fixtures::dashboard_data(Dataset::Ambulatory));
    }

    #[test]
    fn payload_fields_default_when_missing() {
        let data: DashboardData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, DashboardData::default());
    }
}
