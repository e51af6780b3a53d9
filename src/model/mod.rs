//! Pure data structures: products, the basket, and the [`StoreState`] that
//! implements [`ActorState`](crate::framework::ActorState).

pub mod basket;
pub mod product;
pub mod state;

pub use basket::*;
pub use product::*;
pub use state::*;
