use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for state-specific clients to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `snapshot` and `subscribe` on top of the inner [`StateClient`].
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The state-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a clone of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Receiver holding the latest committed state, for render loops.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
