//! Error types surfaced by data loaders.
//!
//! The action layer treats every variant the same way (log, clear `loading`),
//! but keeping them distinct gives useful log lines and lets
//! [`FallbackLoader`](super::FallbackLoader) report why it fell back.
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dashboard request failed")]
    Transport(#[source] reqwest::Error),

    #[error("dashboard request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("dashboard endpoint answered with status {status}")]
    Status { status: u16 },

    #[error("failed to decode dashboard payload")]
    Decode(#[source] serde_json::Error),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}
