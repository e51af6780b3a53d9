//! Generic single-owner state actor.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that a state container implements to be owned by an actor
//! - [`StateActor`] - Generic actor that owns the state and applies transitions
//! - [`StateClient`] - Type-safe, cloneable handle for sending requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
