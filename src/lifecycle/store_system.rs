use std::sync::Arc;

use tracing::{error, info};

use crate::catalog::{HttpCatalog, ProductSource};
use crate::clients::StoreClient;
use crate::config::StoreConfig;
use crate::store_actor::StoreError;

/// Owns the running store actor and hands out its client.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actor
/// - **Dependency Wiring**: Giving the client its [`ProductSource`]
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(&StoreConfig::from_env()?)?;
///
/// system.store_client.fetch_products().await?;
/// let products = system.store_client.products().await?;
/// system.store_client.add_to_basket(products[0].clone()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    /// Client for interacting with the store actor
    pub store_client: StoreClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl StoreSystem {
    /// Starts a store that loads its catalog over HTTP.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Catalog`] if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let catalog = HttpCatalog::new(config)?;
        info!(url = catalog.url(), "Using HTTP catalog");
        Ok(Self::with_source(Arc::new(catalog), config.buffer_size))
    }

    /// Starts a store backed by an arbitrary product source.
    ///
    /// The store begins with no products and an empty basket.
    pub fn with_source(catalog: Arc<dyn ProductSource>, buffer_size: usize) -> Self {
        let (store_actor, client) = crate::store_actor::new(buffer_size);
        let handle = tokio::spawn(store_actor.run());

        Self {
            store_client: StoreClient::new(client, catalog),
            handle,
        }
    }

    /// Gracefully shuts down the store.
    ///
    /// Dropping the client closes the mailbox once every clone of it is gone;
    /// the actor then drains what is queued and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store...");

        drop(self.store_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}
