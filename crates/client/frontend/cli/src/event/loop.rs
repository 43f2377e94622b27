//! Event loop orchestrating user input, timers, and rendering.
//!
//! The loop never composes views itself. Handlers fired from input go through
//! the action layer, the store notifies the render pipeline, and the pipeline
//! swaps a new tree into the mount. The loop only notices that the mount's
//! generation moved and redraws.

use anyhow::Result;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use client_frontend_core::Mount;
use runtime::Actions;

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};

pub struct EventLoop {
    pub(crate) actions: Actions,
    pub(crate) mount: Mount,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
    /// Mount generation shown on screen; `None` before the first draw.
    pub(crate) drawn_generation: Option<u64>,
}

impl EventLoop {
    pub fn new(actions: Actions, mount: Mount, cli_config: CliConfig) -> Self {
        Self {
            actions,
            mount,
            input: InputHandler::new(),
            app_state: AppState::new(),
            cli_config,
            drawn_generation: None,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        let mut auto_refresh = self.cli_config.auto_refresh.map(|period| {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });

        loop {
            tokio::select! {
                _ = time::sleep(self.cli_config.frame_interval) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                    self.redraw_if_changed(terminal)?;
                }
                _ = next_tick(&mut auto_refresh) => {
                    self.handle_auto_refresh_tick();
                }
            }
        }

        Ok(())
    }

    /// Timer-driven reload; goes through the same action as the `r` key.
    fn handle_auto_refresh_tick(&self) {
        tracing::debug!("auto refresh");
        let _ = self.actions.spawn_refresh();
    }
}

/// Waits for the next tick, or forever when the timer is disabled.
async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
