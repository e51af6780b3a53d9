//! Error types for the store actor and its client.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Rejected basket transitions. The basket is unchanged whenever one is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BasketError {
    /// The removal position does not name a basket line.
    #[error("Basket index {index} out of range (basket has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors returned by [`StoreClient`](crate::clients::StoreClient) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Loading the catalog failed; the product list was left as it was.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The store rejected a basket transition.
    #[error("Basket error: {0}")]
    Basket(#[from] BasketError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::ActorCommunicationError(msg)
    }
}
