//! Store-specific state logic: the basket and catalog mutations.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{StateActor, StateClient};
use crate::model::StoreState;

/// Creates a new store actor, starting empty, and its generic client.
pub fn new(buffer_size: usize) -> (StateActor<StoreState>, StateClient<StoreState>) {
    StateActor::new(buffer_size)
}
