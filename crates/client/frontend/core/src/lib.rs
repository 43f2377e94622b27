//! Cross-frontend primitives for presenting the dashboard.
//!
//! Houses the framework-agnostic view tree, the composer that builds it from
//! a snapshot, and the render pipeline that rebuilds it on every store
//! notification. The CLI and any future graphical client reuse all of it.
pub mod compose;
pub mod config;
pub mod format;
pub mod frontend;
pub mod pipeline;
pub mod view;

pub use compose::DashboardComposer;
pub use config::FrontendConfig;
pub use frontend::Frontend;
pub use pipeline::{Composer, Mount, RenderPipeline, Trigger};
pub use view::{Interactive, Tone, ViewNode};
