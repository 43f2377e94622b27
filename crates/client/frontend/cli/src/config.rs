//! CLI-specific configuration for terminal UI.
use std::{env, path::PathBuf, time::Duration};

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Delay between input polls; also bounds redraw latency.
    pub frame_interval: Duration,
    /// Periodic refresh of the current dataset. Disabled when `None`.
    pub auto_refresh: Option<Duration>,
    /// Directory for the log file. Platform cache directory when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            auto_refresh: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Input poll interval in milliseconds (default: 16)
    /// - `CLI_AUTO_REFRESH_SECS` - Reload data every N seconds (default: disabled)
    /// - `DASHBOARD_LOG_DIR` - Log directory (default: platform cache directory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }

        config.auto_refresh = read_env::<u64>("CLI_AUTO_REFRESH_SECS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        if let Some(dir) = env::var_os("DASHBOARD_LOG_DIR").filter(|dir| !dir.is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
