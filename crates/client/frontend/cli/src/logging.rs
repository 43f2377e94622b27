//! File logging for the terminal UI.
//!
//! The TUI owns stdout and stderr, so every log line goes to a file.
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "dashboard.log";

/// Installs the global subscriber writing to `dir` (or the platform default)
/// and returns the log file path.
///
/// `RUST_LOG` refines the filter; the baseline level is `info`.
pub fn setup_logging(dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // Keeps the background writer alive for the life of the process.
    std::mem::forget(guard);

    let log_file = log_dir.join(LOG_FILE);
    tracing::info!("Log file: {}", log_file.display());
    Ok(log_file)
}

/// Platform cache directory (`.../dashboard/logs`), or the temp dir when the
/// home directory cannot be resolved.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dashboard")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("dashboard").join("logs"))
}
