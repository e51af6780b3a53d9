//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); the actor
//! logs carry a `state_type` field instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Store transitions and catalog loads
//! RUST_LOG=info cargo run
//!
//! # Every request, with action payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP catalog
//! RUST_LOG=basket_store::catalog=debug cargo run
//! ```
//!
//! ## Example Output
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started state_type="StoreState"
//! INFO fetch_products: Loading catalog
//! INFO Action ok state_type="StoreState" state=products=30 basket_lines=0 basket_units=0
//! INFO add_to_basket{product_id=1}: Action ok state_type="StoreState" state=products=30 basket_lines=1 basket_units=1
//! WARN remove_from_basket{index=7}: Action failed state_type="StoreState" error=Basket index 7 out of range (basket has 1 lines)
//! ```
//!
//! With `RUST_LOG=debug` each action is also logged with its full payload
//! (`action=AddToBasket(Product { .. })`) before it is applied.

/// Installs the global subscriber.
///
/// Calling it again (e.g. from several tests) is a no-op.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use state_type instead
        .compact() // Compact format shows spans inline (e.g., "add_to_basket{product_id=1}")
        .try_init();
}
