//! Glue code tying the action layer, render pipeline, and terminal together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{DashboardComposer, Frontend, FrontendConfig, Mount, RenderPipeline};
use runtime::Actions;

use crate::{config::CliConfig, event::EventLoop, presentation::terminal};

/// Terminal frontend.
///
/// Owns no state of its own beyond focus: the store is reached through
/// [`Actions`], and the screen always shows the tree last mounted by the
/// render pipeline.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait(?Send)]
impl Frontend for CliFrontend {
    async fn run(&mut self, actions: Actions) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let mount = Mount::new();
        let pipeline = RenderPipeline::attach(
            actions.store(),
            mount.clone(),
            DashboardComposer::new(self.frontend_config.clone()),
            actions.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(actions, mount, self.cli_config.clone());
        let result = event_loop.run(&mut terminal).await;

        tracing::info!(renders = pipeline.renders(), "CLI frontend exiting");
        pipeline.detach();
        terminal::restore()?;

        result
    }
}
