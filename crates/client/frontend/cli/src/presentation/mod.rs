//! Terminal presentation: setup, palette, and drawing of the view tree.
pub mod terminal;
pub mod theme;
pub mod ui;
mod widgets;
