//! Catalog products.
//!
//! Only [`Product::id`] is interpreted by the store. Every other field the
//! source sends lands in [`Product::attributes`] and is serialized back out
//! unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// Identifier of a catalog product.
///
/// Catalogs send either numeric or string ids. Numbers compare by value, so
/// `1` and `1.0` are the same product, but a number never equals a string:
/// `1` and `"1"` are different products.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(Number),
    Text(String),
}

/// Value used for equality and hashing of numeric ids.
#[derive(PartialEq, Eq, Hash)]
enum NumericKey {
    Int(i128),
    Float(u64),
}

fn numeric_key(n: &Number) -> NumericKey {
    if let Some(id) = n.as_i64() {
        return NumericKey::Int(i128::from(id));
    }
    if let Some(id) = n.as_u64() {
        return NumericKey::Int(i128::from(id));
    }
    let id = n.as_f64().unwrap_or(f64::NAN);
    if id.fract() == 0.0 && id.abs() < i128::MAX as f64 {
        NumericKey::Int(id as i128)
    } else {
        NumericKey::Float(id.to_bits())
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => numeric_key(a) == numeric_key(b),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ProductId {}

impl Hash for ProductId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(id) => {
                0_u8.hash(state);
                numeric_key(id).hash(state);
            }
            Self::Text(id) => {
                1_u8.hash(state);
                id.hash(state);
            }
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

/// A catalog entry as received from the product source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Creates a Product with no attributes.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Builder-style setter for one attribute.
    ///
    /// `id` is not an attribute; setting it here is ignored. Use [`Product::new`].
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" {
            self.attributes.insert(key, value.into());
        }
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The `title` attribute, if the catalog sent one as a string.
    pub fn title(&self) -> Option<&str> {
        self.attribute("title").and_then(Value::as_str)
    }
}
