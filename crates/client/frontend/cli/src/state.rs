//! UI-only state that survives re-renders.

/// Focus position within the interactive nodes of the mounted tree.
///
/// The tree is replaced on every render, so focus is tracked by index in
/// depth-first order and clamped whenever the number of targets changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    focus: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self, count: usize) {
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self, count: usize) {
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Keeps focus on an existing target after the tree shrank.
    pub fn clamp(&mut self, count: usize) {
        self.focus = self.focus.min(count.saturating_sub(1));
    }
}
