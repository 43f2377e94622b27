//! Action layer and data sources for the clinical-indicators dashboard.
//!
//! This crate turns user intents into [`Store`](dashboard_core::Store)
//! updates and owns the asynchronous refresh sequence. Modules are organized
//! by responsibility:
//! - [`actions`] hosts the action layer
//! - [`api`] exposes the data-loader abstraction, the HTTP client and the
//!   fallback wrapper
//! - [`fixtures`] bundles the default dataset served when the API is down
//! - [`config`] reads runtime settings from the environment
pub mod actions;
pub mod api;
pub mod config;
pub mod fixtures;

pub use actions::Actions;
pub use api::{
    ApiClient, DashboardData, DataLoader, FallbackLoader, FixtureLoader, LoadError, Result,
    build_loader,
};
pub use config::{ApiConfig, RuntimeConfig};
