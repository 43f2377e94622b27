//! Top-level client wiring the store, the data source, and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Store (single application snapshot)
//!   ├─→ DataLoader (remote API, fallback, or fixtures)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management
//! - **Store**: State and change notification, no I/O
//! - **Actions**: Intents turned into store updates (built by the client)
//! - **Frontend**: Rendering and input, through `Actions` only

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::rc::Rc;

use anyhow::Result;
use dashboard_core::Store;
use runtime::{Actions, DataLoader};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the store, loader, and frontend
/// 2. `Client::run()` builds the action layer and starts the initial refresh
/// 3. Control passes to the frontend until the user quits
/// 4. The store is disposed, dropping every remaining subscriber
///
/// Must run inside a `tokio::task::LocalSet`.
pub struct Client {
    store: Store,
    loader: Rc<dyn DataLoader>,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any.
    pub async fn run(self) -> Result<()> {
        let Client {
            store,
            loader,
            mut frontend,
        } = self;

        let actions = Actions::new(store.clone(), loader);

        // The pipeline subscribes before the first fetch resolves, so the
        // loading state is shown first.
        let initial_refresh = actions.spawn_refresh();

        let frontend_result = frontend.run(actions).await;

        initial_refresh.abort();
        store.dispose();

        frontend_result
    }
}
