//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that all hosted state machines must implement.
//! - [`StateActor`]: The generic actor that owns a state machine.
//! - [`StateClient`]: The generic client for communicating with the actor.
//! - [`ActorError`]: Common errors (channel closed, state rejection).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state machine must implement to be hosted by a [`StateActor`].
///
/// # Architecture Note
/// By defining a contract (`ActorState`) that both our stateful components
/// (the stock ledger, the session) satisfy, we write the message loop *once*
/// and reuse it everywhere.
///
/// The trait splits the request surface in two:
///
/// - **Commands** mutate the state and can fail. A command handler must be
///   all-or-nothing: validate everything first, and leave the state untouched
///   on any error.
/// - **Queries** are read-only and infallible. They are answered synchronously
///   from the current state.
///
/// # Async & Context
/// `handle_command` is `#[async_trait]` so handlers can await external
/// dependencies. Those dependencies arrive through the `Context` type, which
/// is injected into `run()` instead of the constructor ("late binding").
/// Use `()` if no dependencies are needed.
#[async_trait]
pub trait ActorState: Send + 'static {
    /// A mutating request (DTO enum) handled by [`ActorState::handle_command`].
    type Command: Send + Debug;

    /// The success value a command resolves to.
    type CommandResult: Send + Debug;

    /// A read-only request answered by [`ActorState::handle_query`].
    type Query: Send + Debug;

    /// The value a query resolves to.
    type QueryResult: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for rejected commands.
    /// Must implement std::error::Error for proper error propagation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle a mutating request. Must leave the state unchanged on `Err`.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::CommandResult, Self::Error>;

    /// Answer a read-only request from the current state.
    fn handle_query(&self, query: Self::Query) -> Self::QueryResult;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped response channel")]
    Dropped,
    #[error("State error: {0}")]
    State(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by command handlers.
pub type Response<T> = oneshot::Sender<Result<T, ActorError>>;

/// Internal message type sent to the actor.
///
/// # Command/Query Split
/// Instead of defining ad-hoc messages for every operation, we standardize on
/// two shapes that fit almost any exclusively-owned state:
///
/// - **Command**: state mutation. Uses [`ActorState::Command`] and resolves to
///   a [`ActorState::CommandResult`] or an error.
/// - **Query**: retrieval. Uses [`ActorState::Query`] and always resolves to a
///   [`ActorState::QueryResult`]; reads cannot fail.
///
/// The enum is generic over `S: ActorState`, so the compiler guarantees you
/// can't send a session command to the ledger actor.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Command {
        command: S::Command,
        respond_to: Response<S::CommandResult>,
    },
    Query {
        query: S::Query,
        respond_to: oneshot::Sender<S::QueryResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a state machine.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `StateActor` processes its messages *sequentially* in a loop, so the
/// state needs no `Mutex` or `RwLock`. The actor model gives us safety through
/// exclusive ownership of state within the task, exactly the single-writer
/// discipline the stock ledger requires.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around an initial state, plus its client.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial (possibly pre-seeded) state machine.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls on the client will wait until there is space.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every command handler. This allows
    /// the state to reach external dependencies (like the session store) that
    /// were created *after* the actor was instantiated but *before* the loop
    /// started.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "LedgerState" instead of "wms_stock::ledger_actor::state::LedgerState")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(state_type, ?command, "Command");
                    let result = self
                        .state
                        .handle_command(command, &context)
                        .await
                        .map_err(|e| ActorError::State(Box::new(e)));
                    match &result {
                        Ok(_) => info!(state_type, "Command ok"),
                        Err(e) => warn!(state_type, error = %e, "Command rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Query { query, respond_to } => {
                    debug!(state_type, ?query, "Query");
                    let _ = respond_to.send(self.state.handle_query(query));
                }
            }
        }

        info!(state_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StateActor`].
///
/// Holds only a sender, so cloning is inexpensive and the client can be shared
/// across tasks.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
}

// Manual impl: `S` itself is never cloned, only the sender is.
impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn command(&self, command: S::Command) -> Result<S::CommandResult, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)?
    }

    pub async fn query(&self, query: S::Query) -> Result<S::QueryResult, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Query { query, respond_to })
            .await
            .map_err(|_| ActorError::Closed)?;
        response.await.map_err(|_| ActorError::Dropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
