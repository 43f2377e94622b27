//! Action layer: named intents turned into store updates.
//!
//! Each action issues its merges in a fixed order. The only asynchronous
//! sequence is the refresh, which suspends on the [`DataLoader`] without
//! blocking other actions; anything may interleave while it is outstanding.
//!
//! Overlapping refreshes are not cancelled. Each one ends with its own merge,
//! so the refresh that *resolves* last wins, regardless of issue order. The
//! first of two overlapping refreshes to resolve also clears `loading` while
//! the other is still in flight.
//!
//! A refresh reads the dataset and filters it fetches for at the point where
//! its `loading = true` merge is applied, not when the action is called. An
//! action fired from a listener is queued behind the current notification
//! pass, and so is the read.
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use tokio::task::JoinHandle;

use dashboard_core::{Dataset, Filters, Patch, Snapshot, Store, Theme};

use crate::api::DataLoader;

/// Cloneable façade over the store and its data source.
///
/// Actions that start a background refresh use [`tokio::task::spawn_local`]
/// and therefore must be called from within a [`tokio::task::LocalSet`].
#[derive(Clone)]
pub struct Actions {
    store: Store,
    loader: Rc<dyn DataLoader>,
    requests: Rc<RequestCounter>,
}

#[derive(Default)]
struct RequestCounter {
    issued: Cell<u64>,
    latest_applied: Cell<u64>,
}

/// A refresh whose synchronous half (`loading = true`) was dispatched.
///
/// `scope` is filled by the store when that merge is applied.
struct PendingRefresh {
    request: u64,
    scope: Rc<RefCell<Option<(Dataset, Filters)>>>,
}

impl Actions {
    pub fn new(store: Store, loader: Rc<dyn DataLoader>) -> Self {
        Self {
            store,
            loader,
            requests: Rc::new(RequestCounter::default()),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Marks the state as loading, fetches data for the current dataset and
    /// filters, and merges the result with `loading = false`.
    ///
    /// A loader error is logged and still clears `loading`; the previously
    /// loaded data is kept.
    pub async fn refresh_data(&self) {
        let pending = self.begin_refresh();
        self.finish_refresh(pending).await;
    }

    /// Starts a refresh as an independent continuation.
    ///
    /// `loading = true` is merged before this returns; the fetch and the
    /// final merge happen on the spawned task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a [`tokio::task::LocalSet`].
    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        let pending = self.begin_refresh();
        let actions = self.clone();
        tokio::task::spawn_local(async move { actions.finish_refresh(pending).await })
    }

    /// Switches dataset, resetting filters, then refreshes.
    ///
    /// Subscribers observe three notifications: `{dataset, filters: {}}`,
    /// then `loading = true`, then the loaded data. The returned handle
    /// resolves when the refresh completes; the action does not await it.
    pub fn change_dataset(&self, dataset: Dataset) -> JoinHandle<()> {
        tracing::info!(%dataset, "changing dataset");
        self.store
            .set_state(Patch::new().dataset(dataset).filters(Filters::new()));
        self.spawn_refresh()
    }

    /// Switches the presentation theme. Does not refresh.
    pub fn toggle_theme(&self, theme: Theme) {
        tracing::info!(%theme, "changing theme");
        self.store.set_state(Patch::new().theme(theme));
    }

    /// Sets one filter, keeping every other selected filter, then refreshes.
    pub fn apply_filter(&self, name: impl Into<String>, value: impl Into<String>) -> JoinHandle<()> {
        let name = name.into();
        let value = value.into();
        tracing::info!(%name, %value, "applying filter");

        self.store.update_state(move |current| {
            let mut filters = current.filters;
            filters.insert(name, value);
            Patch::new().filters(filters)
        });
        self.spawn_refresh()
    }

    fn begin_refresh(&self) -> PendingRefresh {
        let request = self.requests.issued.get() + 1;
        self.requests.issued.set(request);

        let scope = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&scope);
        self.store.update_state(move |current| {
            *slot.borrow_mut() = Some((current.dataset, current.filters));
            Patch::new().loading(true)
        });

        PendingRefresh { request, scope }
    }

    async fn finish_refresh(&self, pending: PendingRefresh) {
        let PendingRefresh { request, scope } = pending;
        // Empty only if the loading merge never ran.
        let (dataset, filters) = scope.borrow_mut().take().unwrap_or_else(|| {
            let Snapshot {
                dataset, filters, ..
            } = self.store.get_state();
            (dataset, filters)
        });
        tracing::debug!(request, %dataset, ?filters, "refresh started");

        match self.loader.load(dataset, &filters).await {
            Ok(data) => {
                if request < self.requests.latest_applied.get() {
                    tracing::warn!(
                        request,
                        latest = self.requests.latest_applied.get(),
                        "stale refresh resolved after a newer one; applying it anyway"
                    );
                }
                self.requests
                    .latest_applied
                    .set(request.max(self.requests.latest_applied.get()));

                self.store.set_state(
                    Patch::new()
                        .summary(data.summary)
                        .series(data.series)
                        .records(data.records)
                        .loading(false),
                );
                tracing::info!(request, %dataset, "refresh completed");
            }
            Err(error) => {
                tracing::error!(request, %dataset, error = %error, "refresh failed");
                self.store.set_state(Patch::new().loading(false));
            }
        }
    }
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actions")
            .field("store", &self.store)
            .field("requests_issued", &self.requests.issued.get())
            .finish_non_exhaustive()
    }
}
