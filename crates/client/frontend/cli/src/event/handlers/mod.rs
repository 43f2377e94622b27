//! Event loop handlers, split by concern.
//!
//! - `input`: keyboard polling and dispatch to view handlers
//! - `rendering`: drawing the mounted tree when it changed

mod input;
mod rendering;
