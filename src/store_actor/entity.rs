//! [`ActorState`] implementation for [`StoreState`].
//!
//! This is what lets the store be owned by the generic
//! [`StateActor`](crate::framework::StateActor).

use super::actions::{StoreAction, StoreActionResult};
use super::error::BasketError;
use crate::framework::ActorState;
use crate::model::StoreState;
use async_trait::async_trait;

#[async_trait]
impl ActorState for StoreState {
    type Action = StoreAction;
    type ActionResult = StoreActionResult;
    type Error = BasketError;

    /// Applies one store mutation.
    ///
    /// # Actions
    /// - `SetProducts`: Replaces the catalog wholesale
    /// - `AddToBasket`: Bumps the matching line or appends a new one
    /// - `RemoveFromBasket`: Removes one line, or fails leaving the basket as is
    async fn handle_action(&mut self, action: StoreAction) -> Result<StoreActionResult, BasketError> {
        match action {
            StoreAction::SetProducts(products) => {
                self.replace_products(products);
                Ok(StoreActionResult::SetProducts(self.products().len()))
            }
            StoreAction::AddToBasket(product) => {
                Ok(StoreActionResult::AddToBasket(self.add_to_basket(product)))
            }
            StoreAction::RemoveFromBasket(index) => {
                self.remove_from_basket(index)
                    .map(StoreActionResult::RemoveFromBasket)
            }
        }
    }

    fn summary(&self) -> String {
        format!(
            "products={} basket_lines={} basket_units={}",
            self.products().len(),
            self.basket().len(),
            self.basket().total_quantity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};

    #[tokio::test]
    async fn test_set_products_replaces_wholesale() {
        let mut state = StoreState::with_products(vec![Product::new(1_i64), Product::new(2_i64)]);

        let result = state
            .handle_action(StoreAction::SetProducts(vec![Product::new(9_i64)]))
            .await
            .unwrap();

        assert_eq!(result, StoreActionResult::SetProducts(1));
        assert_eq!(state.products(), &[Product::new(9_i64)]);
    }

    #[tokio::test]
    async fn test_add_then_remove_scenario() {
        let mut state = StoreState::default();

        let first = state
            .handle_action(StoreAction::AddToBasket(Product::new(1_i64)))
            .await
            .unwrap();
        match first {
            StoreActionResult::AddToBasket(item) => assert_eq!(item.quantity, 1),
            other => panic!("Expected AddToBasket result, got {other:?}"),
        }

        state
            .handle_action(StoreAction::AddToBasket(Product::new(1_i64)))
            .await
            .unwrap();
        assert_eq!(state.basket().len(), 1);
        assert_eq!(state.basket().get(0).unwrap().quantity, 2);

        let removed = state
            .handle_action(StoreAction::RemoveFromBasket(0))
            .await
            .unwrap();
        match removed {
            StoreActionResult::RemoveFromBasket(item) => {
                assert_eq!(item.id(), &ProductId::from(1_i64));
                assert_eq!(item.quantity, 2);
            }
            other => panic!("Expected RemoveFromBasket result, got {other:?}"),
        }
        assert!(state.basket().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_remove_leaves_state() {
        let mut state = StoreState::default();
        state
            .handle_action(StoreAction::AddToBasket(Product::new("sku-1")))
            .await
            .unwrap();
        let before = state.clone();

        let err = state
            .handle_action(StoreAction::RemoveFromBasket(5))
            .await
            .unwrap_err();

        assert_eq!(err, BasketError::IndexOutOfRange { index: 5, len: 1 });
        assert_eq!(state, before);
    }

    #[test]
    fn test_summary() {
        let state = StoreState::with_products(vec![Product::new(1_i64)]);
        assert_eq!(state.summary(), "products=1 basket_lines=0 basket_units=0");
    }
}
