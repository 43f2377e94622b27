//! Event handling for CLI client.
//!
//! This module contains the event loop that coordinates user input, timers
//! and redraws of the mounted view tree.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
