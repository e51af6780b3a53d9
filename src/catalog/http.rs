//! # HTTP Catalog
//!
//! [`HttpCatalog`] loads products with one plain `GET` to the configured URL.
//! No query parameters, extra headers or authentication are sent.

use super::{parse_catalog, CatalogError, ProductSource};
use crate::config::StoreConfig;
use crate::model::Product;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Product source backed by a remote JSON endpoint.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    /// Builds a catalog client from the store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: &StoreConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: config.catalog_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog returned non-success status");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        let products = parse_catalog(&body)?;
        debug!(count = products.len(), "Catalog decoded");
        Ok(products)
    }
}
