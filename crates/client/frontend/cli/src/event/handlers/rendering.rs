//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Draws the mounted tree.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        self.app_state.clamp(self.mount.interactive_count());

        let snapshot = self.actions.store().get_state();
        let generation = self.mount.generation();

        self.mount.with_tree(|tree| {
            let ctx = ui::RenderContext {
                tree,
                theme: snapshot.theme,
                dataset: snapshot.dataset,
                focus: self.app_state.focus(),
            };
            ui::render(terminal, &ctx)
        })?;

        self.drawn_generation = Some(generation);
        Ok(())
    }

    /// Redraws only when the pipeline mounted a new tree since the last draw.
    pub(in crate::event) fn redraw_if_changed(&mut self, terminal: &mut Tui) -> Result<()> {
        if self.drawn_generation != Some(self.mount.generation()) {
            self.render(terminal)?;
        }
        Ok(())
    }
}
