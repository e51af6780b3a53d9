//! Process-level wiring: starting and stopping the store, and logging setup.

pub mod store_system;
pub mod tracing;

pub use self::store_system::StoreSystem;
pub use self::tracing::setup_tracing;
