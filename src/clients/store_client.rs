//! # Store Client
//!
//! The dispatch surface the UI talks to. It wraps a `StateClient<StoreState>`
//! and the [`ProductSource`] used to load the catalog.
//!
//! Loading happens here, in the caller's task, and only the finished list is
//! sent to the actor as one `SetProducts` mutation. Basket changes issued while
//! a load is in flight are therefore applied immediately.
use crate::catalog::ProductSource;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::model::{Basket, BasketItem, Product, StoreState};
use crate::store_actor::{BasketError, StoreAction, StoreActionResult, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the store actor.
#[derive(Clone)]
pub struct StoreClient {
    inner: StateClient<StoreState>,
    catalog: Arc<dyn ProductSource>,
}

#[async_trait]
impl ActorClient<StoreState> for StoreClient {
    type Error = StoreError;

    fn inner(&self) -> &StateClient<StoreState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(inner) => match inner.downcast::<BasketError>() {
                Ok(basket) => StoreError::Basket(*basket),
                Err(other) => StoreError::ActorCommunicationError(other.to_string()),
            },
            other => StoreError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl StoreClient {
    pub fn new(inner: StateClient<StoreState>, catalog: Arc<dyn ProductSource>) -> Self {
        Self { inner, catalog }
    }

    /// Load the catalog and replace the product list with it.
    ///
    /// Single attempt. On failure the error is returned and the current
    /// product list is left untouched. Returns the number of products loaded.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<usize, StoreError> {
        info!("Loading catalog");
        let products = match self.catalog.fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                return Err(e.into());
            }
        };
        self.set_products(products).await
    }

    /// Replace the product list wholesale.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn set_products(&self, products: Vec<Product>) -> Result<usize, StoreError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(StoreAction::SetProducts(products))
            .await
            .map_err(Self::map_error)?
        {
            StoreActionResult::SetProducts(count) => Ok(count),
            other => Err(unexpected("SetProducts", &other)),
        }
    }

    /// Add one unit of `product` to the basket.
    ///
    /// Returns the basket line after the add.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_basket(&self, product: Product) -> Result<BasketItem, StoreError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(StoreAction::AddToBasket(product))
            .await
            .map_err(Self::map_error)?
        {
            StoreActionResult::AddToBasket(item) => Ok(item),
            other => Err(unexpected("AddToBasket", &other)),
        }
    }

    /// Remove the basket line at `index`.
    ///
    /// Returns the removed line, or [`StoreError::Basket`] if `index` is out
    /// of range, in which case the basket is unchanged.
    #[instrument(skip(self))]
    pub async fn remove_from_basket(&self, index: usize) -> Result<BasketItem, StoreError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(StoreAction::RemoveFromBasket(index))
            .await
            .map_err(Self::map_error)?
        {
            StoreActionResult::RemoveFromBasket(item) => Ok(item),
            other => Err(unexpected("RemoveFromBasket", &other)),
        }
    }

    /// Current product list.
    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        let state = self.snapshot().await?;
        Ok(state.products().to_vec())
    }

    /// Current basket.
    pub async fn basket(&self) -> Result<Basket, StoreError> {
        let state = self.snapshot().await?;
        Ok(state.basket().clone())
    }
}

fn unexpected(action: &str, result: &StoreActionResult) -> StoreError {
    StoreError::ActorCommunicationError(format!(
        "{action} answered with mismatched result {result:?}"
    ))
}
