//! Named transitions for the store actor.
//!
//! These are the only ways the [`StoreState`](crate::model::StoreState) changes.
//! They are applied by [`ActorState::handle_action`](crate::framework::ActorState::handle_action).

use crate::model::{BasketItem, Product};
use std::fmt;

/// Mutations accepted by the store.
///
/// `Debug` prints `SetProducts` as its product count only.
#[derive(Clone)]
pub enum StoreAction {
    /// Replaces the whole catalog.
    SetProducts(Vec<Product>),
    /// Adds one unit of a product to the basket, merging by id.
    AddToBasket(Product),
    /// Removes the basket line at a zero-based position.
    ///
    /// # Errors
    /// Fails without changing the basket if the position is out of range.
    RemoveFromBasket(usize),
}

impl fmt::Debug for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetProducts(products) => f
                .debug_struct("SetProducts")
                .field("count", &products.len())
                .finish(),
            Self::AddToBasket(product) => f.debug_tuple("AddToBasket").field(product).finish(),
            Self::RemoveFromBasket(index) => f.debug_tuple("RemoveFromBasket").field(index).finish(),
        }
    }
}

/// Results from StoreActions - variants match 1:1 with StoreAction
#[derive(Debug, Clone, PartialEq)]
pub enum StoreActionResult {
    /// Number of products now in the catalog
    SetProducts(usize),
    /// The basket line after the add
    AddToBasket(BasketItem),
    /// The line that was removed
    RemoveFromBasket(BasketItem),
}
