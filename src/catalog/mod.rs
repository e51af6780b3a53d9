//! # Product Catalog
//!
//! The store loads its product list from a [`ProductSource`]. The production
//! source is [`HttpCatalog`], a single `GET` against the catalog endpoint; tests
//! plug in their own sources.
//!
//! The expected payload is a JSON object with a `products` array:
//!
//! ```text
//! { "products": [ { "id": 1, "title": "..." }, ... ], "total": 194, "skip": 0, "limit": 30 }
//! ```
//!
//! Only `products` is read. Each record must carry an `id`; every other field
//! is kept verbatim on the [`Product`].

pub mod error;
pub mod http;

pub use error::*;
pub use http::*;

use crate::model::Product;
use async_trait::async_trait;
use serde::Deserialize;

/// Something the store can load its catalog from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches the full product list in one attempt.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Wire shape of a catalog response.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    products: Vec<Product>,
}

/// Decodes a catalog response body into its product list.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    let response: CatalogResponse = serde_json::from_slice(body)?;
    Ok(response.products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_parse_catalog_keeps_order_and_ignores_paging() {
        let body = br#"{
            "products": [
                { "id": 2, "title": "Eyeshadow Palette", "price": 19.99 },
                { "id": 1, "title": "Essence Mascara", "price": 9.99 }
            ],
            "total": 194,
            "skip": 0,
            "limit": 2
        }"#;

        let products = parse_catalog(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId::from(2_i64));
        assert_eq!(products[1].title(), Some("Essence Mascara"));
    }

    #[test]
    fn test_parse_catalog_accepts_any_json_number_id() {
        let body = br#"{ "products": [
            { "id": 1.0 },
            { "id": 2.5 },
            { "id": 9223372036854775808 },
            { "id": 2 }
        ] }"#;

        let products = parse_catalog(body).unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].id, ProductId::from(1_i64));
        assert_eq!(products[1].id.to_string(), "2.5");
        assert_eq!(products[2].id, ProductId::from(9223372036854775808_u64));
        assert_eq!(products[3].id, ProductId::from(2_i64));
    }

    #[test]
    fn test_parse_catalog_empty_list() {
        assert!(parse_catalog(br#"{ "products": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_payloads() {
        let bodies: [&[u8]; 5] = [
            b"not json",
            br#"{ "items": [] }"#,
            br#"{ "products": {} }"#,
            br#"{ "products": [ { "title": "no id" } ] }"#,
            br#"[ { "id": 1 } ]"#,
        ];
        for body in bodies {
            let result = parse_catalog(body);
            assert!(
                matches!(result, Err(CatalogError::Payload(_))),
                "expected payload error for {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
