//! Frontend configuration structures and loaders.
//!
//! UI settings shared by every frontend implementation.
use std::env;

#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Upper bound on rows shown by the records table.
    pub max_table_rows: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self { max_table_rows: 50 }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DASHBOARD_MAX_TABLE_ROWS` - Records table row limit (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rows) = read_env::<usize>("DASHBOARD_MAX_TABLE_ROWS") {
            config.max_table_rows = rows.max(1);
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
