//! Clinical-indicators dashboard binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Data source (remote API with fallback, or fixtures offline)
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are injected into the Client container, which owns the store.
//!
//! Everything runs on one thread: a current-thread runtime plus a
//! `LocalSet`, since the store and the action layer are `!Send`.
//!
//! # Examples
//!
//! ```bash
//! # Remote endpoint
//! DASHBOARD_API_URL=https://example.org/api cargo run -p dashboard-client
//!
//! # Bundled data only
//! DASHBOARD_OFFLINE=1 cargo run -p dashboard-client
//! ```

use anyhow::Result;
use tokio::task::LocalSet;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        LocalSet::new().run_until(run_cli()).await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dashboard_client::Client;
    use runtime::{RuntimeConfig, build_loader};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting dashboard client");
    tracing::info!("API endpoint: {}", runtime_config.api.base_url);
    tracing::info!("Offline mode: {}", runtime_config.api.offline);

    // 3. Build data source (independent layer)
    let loader = build_loader(&runtime_config.api);

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().loader(loader).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
