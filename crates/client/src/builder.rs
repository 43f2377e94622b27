//! Client builder with dependency injection pattern.

use std::rc::Rc;

use anyhow::{Context, Result};
use dashboard_core::{Snapshot, Store};
use runtime::DataLoader;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// - **Required fields**: Loader and Frontend must be provided
/// - **Optional fields**: Store defaults to a fresh one holding the startup
///   snapshot (`loading = true`, nothing loaded)
#[derive(Default)]
pub struct ClientBuilder {
    store: Option<Store>,
    loader: Option<Rc<dyn DataLoader>>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing store (optional).
    pub fn store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the data source (required).
    ///
    /// Usually built with `runtime::build_loader` from `RuntimeConfig`.
    pub fn loader(mut self, loader: Rc<dyn DataLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let loader = self
            .loader
            .context("Loader is required. Use .loader() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            store: self
                .store
                .unwrap_or_else(|| Store::new(Snapshot::default())),
            loader,
            frontend,
        })
    }
}
