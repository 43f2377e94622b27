//! Terminal UI frontend for the clinical-indicators dashboard.
//!
//! This crate implements the `client_frontend_core::Frontend` trait on top of
//! ratatui and crossterm.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the action layer from the client
//! - Attaches the render pipeline, which keeps a mount in sync with the store
//! - Draws the mounted view tree and routes key presses to its handlers

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
