//! Public data-source API surface.
//!
//! Gathers the loader abstraction, its implementations and their error type
//! so the action layer can stay focused on orchestration.

pub mod client;
pub mod errors;
pub mod loader;

use std::rc::Rc;

pub use client::ApiClient;
pub use errors::{LoadError, Result};
pub use loader::{DashboardData, DataLoader, FallbackLoader, FixtureLoader};

use crate::config::ApiConfig;

/// Builds the loader described by `config`.
///
/// Offline mode serves fixtures directly; otherwise the HTTP client is
/// wrapped so that any failure resolves with fixtures.
pub fn build_loader(config: &ApiConfig) -> Rc<dyn DataLoader> {
    if config.offline {
        tracing::info!("offline mode: serving bundled dashboard data");
        Rc::new(FixtureLoader)
    } else {
        tracing::info!(url = %config.base_url, "using remote dashboard endpoint");
        Rc::new(FallbackLoader::new(ApiClient::new(config)))
    }
}
