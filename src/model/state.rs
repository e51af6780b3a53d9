//! The store's whole state: the catalog and the basket.

use crate::model::{Basket, BasketItem, Product};
use crate::store_actor::BasketError;
use serde::Serialize;

/// State owned by the store actor.
///
/// Fields are private; callers outside the actor only ever see clones, and
/// the mutators are reachable only through
/// [`StoreAction`](crate::store_actor::StoreAction).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreState {
    products: Vec<Product>,
    basket: Basket,
}

impl StoreState {
    /// Creates a state with a preloaded catalog and an empty basket.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            basket: Basket::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub(crate) fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub(crate) fn add_to_basket(&mut self, product: Product) -> BasketItem {
        self.basket.add(product).clone()
    }

    pub(crate) fn remove_from_basket(&mut self, index: usize) -> Result<BasketItem, BasketError> {
        self.basket.remove(index)
    }
}
