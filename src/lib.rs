//! # Basket Store
//!
//! A small storefront state container: a product catalog loaded from a remote
//! endpoint, and a shopping basket built from it.
//!
//! The state lives inside a single Tokio task (a [`StateActor`](framework::StateActor))
//! and is only ever changed by messages sent through its client. Readers get
//! clones, either on demand or pushed through a `watch` subscription after every
//! committed change.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic single-owner actor, its client, and the mocks used to test clients.
//! - **Key items**: [`ActorState`](framework::ActorState), [`StateActor`](framework::StateActor),
//!   [`StateClient`](framework::StateClient).
//!
//! ### 2. The Data ([`model`])
//! [`Product`](model::Product), [`Basket`](model::Basket) and the basket aggregation rules,
//! plus the [`StoreState`](model::StoreState) the actor owns.
//!
//! ### 3. The Mutations ([`store_actor`])
//! The three store actions and the [`ActorState`](framework::ActorState) impl that applies them.
//!
//! ### 4. The Catalog ([`catalog`])
//! The [`ProductSource`](catalog::ProductSource) seam and its HTTP implementation.
//!
//! ### 5. The Interface ([`clients`])
//! [`StoreClient`](clients::StoreClient): `fetch_products`, `add_to_basket`,
//! `remove_from_basket` and the read side.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`StoreSystem`](lifecycle::StoreSystem) starts and stops the actor;
//! [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! See [`config`] for the environment variables the demo reads.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod store_actor;
