//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Actions;

/// Frontend abstraction for UI layers.
///
/// Frontends read state through the store behind [`Actions`] and express
/// user intent only through the action layer. They do NOT own the store.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{DashboardComposer, Frontend, Mount, RenderPipeline};
/// use runtime::Actions;
/// use anyhow::Result;
///
/// struct HeadlessFrontend;
///
/// #[async_trait(?Send)]
/// impl Frontend for HeadlessFrontend {
///     async fn run(&mut self, actions: Actions) -> Result<()> {
///         let mount = Mount::new();
///         let pipeline = RenderPipeline::attach(
///             actions.store(),
///             mount.clone(),
///             DashboardComposer::default(),
///             actions.clone(),
///         );
///         actions.refresh_data().await;
///         pipeline.detach();
///         Ok(())
///     }
/// }
/// ```
#[async_trait(?Send)]
pub trait Frontend {
    /// Run the frontend event loop until the user quits.
    ///
    /// Called from within a `tokio::task::LocalSet`; actions that refresh
    /// data spawn local tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, actions: Actions) -> Result<()>;
}
