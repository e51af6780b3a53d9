//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while fetching the product catalog.
///
/// All three are surfaced to the caller unhandled: there is no retry and no
/// fallback.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, TLS, timeout...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog at {url} returned status {status}")]
    Status { status: u16, url: String },

    /// The body was not a JSON object with a `products` array of records carrying an `id`.
    #[error("Malformed catalog payload: {0}")]
    Payload(#[from] serde_json::Error),
}
