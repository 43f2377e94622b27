//! Input handling (keyboard).

use anyhow::Result;
use client_frontend_core::Trigger;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the focused view handler.
    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let targets = self.mount.interactive_count();

        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("quit requested");
                Ok(true)
            }
            KeyAction::FocusNext => {
                self.app_state.focus_next(targets);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::FocusPrev => {
                self.app_state.focus_prev(targets);
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::Activate => {
                self.fire(Trigger::Press);
                Ok(false)
            }
            KeyAction::Next => {
                self.fire(Trigger::Next);
                Ok(false)
            }
            KeyAction::Previous => {
                self.fire(Trigger::Previous);
                Ok(false)
            }
            KeyAction::Refresh => {
                tracing::info!("manual refresh");
                let _ = self.actions.spawn_refresh();
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    /// Fires the focused handler. Any resulting re-render lands in the mount
    /// and is drawn by the next `redraw_if_changed`.
    fn fire(&mut self, trigger: Trigger) {
        let focus = self.app_state.focus();
        if !self.mount.trigger(focus, trigger) {
            tracing::trace!(focus, ?trigger, "no handler for input");
        }
    }
}
