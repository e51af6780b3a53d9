//! The shopping basket and its aggregation rules.
//!
//! A [`Basket`] holds at most one [`BasketItem`] per [`ProductId`]. Adding a
//! product that is already present bumps that line's quantity in place; the
//! line keeps its original position and its original attributes.

use crate::model::{Product, ProductId};
use crate::store_actor::BasketError;
use serde::{Deserialize, Serialize};

/// One line in the basket: a product plus how many of it.
///
/// Serializes flat, i.e. the product's fields with `quantity` alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl BasketItem {
    /// Creates a line with `quantity = 1`.
    ///
    /// A `quantity` attribute carried by the product is dropped; the line's own
    /// counter takes its place.
    pub fn new(mut product: Product) -> Self {
        product.attributes.remove("quantity");
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// Insertion-ordered basket lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// If a line with the same id exists its quantity goes up by one and
    /// nothing else about it changes. Otherwise a new line is appended.
    /// Returns the affected line.
    pub fn add(&mut self, product: Product) -> &BasketItem {
        let index = match self.position(&product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(BasketItem::new(product));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Removes the line at `index`, shifting later lines left.
    ///
    /// An out-of-range index leaves the basket untouched.
    pub fn remove(&mut self, index: usize) -> Result<BasketItem, BasketError> {
        if index >= self.items.len() {
            return Err(BasketError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Position of the first line holding `id`.
    pub fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&BasketItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BasketItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a BasketItem;
    type IntoIter = std::slice::Iter<'a, BasketItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: i64) -> Product {
        Product::new(id).with_attribute("title", format!("Product {id}"))
    }

    fn ids(basket: &Basket) -> Vec<ProductId> {
        basket.iter().map(|item| item.id().clone()).collect()
    }

    #[test]
    fn test_adding_same_id_twice_merges() {
        let mut basket = Basket::new();
        basket.add(product(1));
        assert_eq!(basket.len(), 1);

        let item = basket.add(product(1));
        assert_eq!(item.quantity, 2);
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_order_is_first_insertion_order() {
        let mut basket = Basket::new();
        basket.add(product(1));
        basket.add(product(2));
        basket.add(product(1));

        assert_eq!(ids(&basket), vec![ProductId::from(1_i64), ProductId::from(2_i64)]);
        assert_eq!(basket.get(0).unwrap().quantity, 2);
        assert_eq!(basket.get(1).unwrap().quantity, 1);
        assert_eq!(basket.total_quantity(), 3);
    }

    #[test]
    fn test_merge_keeps_stored_attributes() {
        let mut basket = Basket::new();
        basket.add(Product::new(1_i64).with_attribute("price", 10));
        basket.add(Product::new(1_i64).with_attribute("price", 99));

        let item = basket.get(0).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.product.attribute("price"), Some(&json!(10)));
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut basket = Basket::new();
        for id in 1..=3 {
            basket.add(product(id));
        }

        let removed = basket.remove(1).unwrap();
        assert_eq!(removed.id(), &ProductId::from(2_i64));
        assert_eq!(ids(&basket), vec![ProductId::from(1_i64), ProductId::from(3_i64)]);
    }

    #[test]
    fn test_remove_out_of_range_is_rejected_without_change() {
        let mut basket = Basket::new();
        basket.add(product(1));
        let before = basket.clone();

        let err = basket.remove(1).unwrap_err();
        assert_eq!(err, BasketError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(basket, before);

        assert!(Basket::new().remove(0).is_err());
    }

    #[test]
    fn test_removed_product_can_be_added_again() {
        let mut basket = Basket::new();
        basket.add(product(1));
        basket.add(product(1));
        basket.remove(0).unwrap();
        assert!(basket.is_empty());

        assert_eq!(basket.add(product(1)).quantity, 1);
    }

    #[test]
    fn test_quantity_attribute_is_replaced_by_counter() {
        let mut basket = Basket::new();
        basket.add(product(4).with_attribute("quantity", 50));

        let value = serde_json::to_value(&basket).unwrap();
        assert_eq!(value, json!([{ "id": 4, "title": "Product 4", "quantity": 1 }]));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut basket = Basket::new();
        basket.add(product(1));
        basket.items[0].quantity = u32::MAX;

        assert_eq!(basket.add(product(1)).quantity, u32::MAX);
    }
}
