//! Runtime configuration structures and loaders.
use std::{env, time::Duration};

/// Configuration for the action layer and its data source.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub api: ApiConfig,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DASHBOARD_API_URL` - Base URL of the dashboard endpoint
    /// - `DASHBOARD_API_TIMEOUT_MS` - Request timeout in milliseconds (default: 6000)
    /// - `DASHBOARD_PAGE_SIZE` - Rows requested per page (default: unset)
    /// - `DASHBOARD_OFFLINE` - Serve bundled data without contacting the API (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("DASHBOARD_API_URL")
            && !url.trim().is_empty()
        {
            config.api.base_url = url.trim().to_string();
        }

        if let Some(timeout_ms) = read_env::<u64>("DASHBOARD_API_TIMEOUT_MS") {
            config.api.timeout = Duration::from_millis(timeout_ms.max(1));
        }

        config.api.page_size = read_env::<u32>("DASHBOARD_PAGE_SIZE").filter(|size| *size > 0);

        if let Some(offline) = read_env_bool("DASHBOARD_OFFLINE") {
            config.api.offline = offline;
        }

        config
    }
}

/// Remote dashboard endpoint settings.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: Option<u32>,
    /// Skip the network entirely and serve bundled data.
    pub offline: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://script.google.com/macros/s/dummy/exec".to_string(),
            timeout: Duration::from_millis(6000),
            page_size: None,
            offline: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
