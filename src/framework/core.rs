//! # Core Actor Framework
//!
//! This module defines the generic building blocks for a single-owner state actor.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that a state container must implement.
//! - [`StateActor`]: The generic actor that owns the state.
//! - [`StateClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, StateError).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that a state container must implement to be owned by a [`StateActor`].
///
/// # Architecture Note
/// The state is never shared. The actor task holds the only mutable copy and
/// every change goes through [`ActorState::handle_action`]. Readers get clones,
/// either on request ([`StateClient::snapshot`]) or pushed through the `watch`
/// channel returned by [`StateClient::subscribe`].
///
/// `Action` is the set of named transitions the state accepts. Keeping it an
/// associated type means a basket mutation can't be sent to some other actor.
#[async_trait]
pub trait ActorState: Default + Clone + Send + Sync + 'static {
    /// Enum of the named transitions (mutations) this state accepts.
    type Action: Send + Sync + Debug;

    /// The result type returned by transitions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for rejected transitions.
    ///
    /// A rejected transition must leave the state exactly as it was.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply a transition to the state.
    async fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Short description of the state used in the actor's log lines.
    fn summary(&self) -> String {
        String::new()
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Snapshot**: Read. Returns a clone of the whole state.
/// - **Action**: Write. Applies one [`ActorState::Action`].
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Snapshot {
        respond_to: Response<S>,
    },
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one state value.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the
/// receiver end of the channel. Messages are processed *sequentially*, so the
/// state needs no `Mutex` or `RwLock`.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` holding `S::default()` and its client.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client
    /// calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StateClient<S>) {
        Self::with_state(buffer_size, S::default())
    }

    /// Creates a new `StateActor` starting from `state`.
    pub fn with_state(buffer_size: usize, state: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        let client = StateClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "StoreState" instead of "basket_store::model::state::StoreState")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            info!(state_type, state = %self.state.summary(), "Action ok");
                            self.publisher.send_replace(self.state.clone());
                        }
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(state_type, state = %self.state.summary(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `StateActor`.
///
/// Cloning is cheap: it holds a sender and a watch receiver.
#[derive(Clone)]
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: S::Action) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns a receiver that always holds the latest committed state.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watcher.clone()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- State Definition ---

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Counter {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Decrement,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("counter is already zero")]
    struct Underflow;

    #[async_trait]
    impl ActorState for Counter {
        type Action = CounterAction;
        type ActionResult = u32;
        type Error = Underflow;

        async fn handle_action(&mut self, action: CounterAction) -> Result<u32, Underflow> {
            match action {
                CounterAction::Increment => self.value += 1,
                CounterAction::Decrement => {
                    self.value = self.value.checked_sub(1).ok_or(Underflow)?;
                }
            }
            Ok(self.value)
        }

        fn summary(&self) -> String {
            format!("value={}", self.value)
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_state_actor_with_actions() {
        let (actor, client) = StateActor::<Counter>::new(10);
        let handle = tokio::spawn(actor.run());

        // 1. Perform Action: Increment twice
        assert_eq!(client.perform_action(CounterAction::Increment).await.unwrap(), 1);
        assert_eq!(client.perform_action(CounterAction::Increment).await.unwrap(), 2);

        // 2. Snapshot
        let state = client.snapshot().await.unwrap();
        assert_eq!(state, Counter { value: 2 });

        // 3. Rejected action leaves state alone
        client.perform_action(CounterAction::Decrement).await.unwrap();
        client.perform_action(CounterAction::Decrement).await.unwrap();
        let err = client.perform_action(CounterAction::Decrement).await.unwrap_err();
        match err {
            FrameworkError::StateError(inner) => {
                assert_eq!(*inner.downcast::<Underflow>().unwrap(), Underflow);
            }
            other => panic!("Expected StateError, got {other:?}"),
        }
        assert_eq!(client.snapshot().await.unwrap().value, 0);

        // 4. Shutdown when the last client goes away
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_subscribe_sees_committed_state() {
        let (actor, client) = StateActor::<Counter>::with_state(10, Counter { value: 5 });
        tokio::spawn(actor.run());

        let mut watcher = client.subscribe();
        assert_eq!(watcher.borrow().value, 5);

        client.perform_action(CounterAction::Increment).await.unwrap();
        watcher.changed().await.unwrap();
        assert_eq!(watcher.borrow_and_update().value, 6);
    }

    #[tokio::test]
    async fn test_failed_action_is_not_published() {
        let (actor, client) = StateActor::<Counter>::new(10);
        tokio::spawn(actor.run());

        let watcher = client.subscribe();
        assert!(client.perform_action(CounterAction::Decrement).await.is_err());
        assert!(!watcher.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = StateActor::<Counter>::new(10);
        drop(actor);

        let err = client.snapshot().await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
