//! # Mock Framework & Testing Guide
//!
//! The [`MockClient`] type implements the same `StateClient<S>` API as the
//! production client but operates entirely in-memory. It lets you set
//! expectations and return values for unit tests, enabling fast, deterministic
//! testing of client logic without spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the state machine or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! - **Client logic** (e.g. `LedgerClient` result unwrapping): use
//!   [`MockClient`] or the channel-level helpers below.
//! - **State machine logic**: call the handlers on the state directly in a
//!   `#[cfg(test)]` module, no channels involved.
//! - **Full system**: build a `StockSystem` in `tests/` and drive it
//!   end-to-end.
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the
//! fluent [`MockClient`] API.

use crate::framework::core::{ActorError, ActorState, StateClient, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<S: ActorState> {
    Command {
        response: Result<S::CommandResult, ActorError>,
    },
    Query {
        response: S::QueryResult,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<LedgerState>::new();
/// mock.expect_command().return_ok(transaction);
/// mock.expect_query().returns(LedgerQueryResult::Products(vec![]));
///
/// let client = LedgerClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before responding

                match (request, expectation) {
                    (
                        StateRequest::Command {
                            command: _,
                            respond_to,
                        },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Query {
                            query: _,
                            respond_to,
                        },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects a `command` call.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<S> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` call.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<S> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `command` expectations.
pub struct CommandExpectationBuilder<S: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ActorState> CommandExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::CommandResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ActorError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<S: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ActorState> QueryExpectationBuilder<S> {
    /// Sets the value the query resolves to. Queries are infallible, so there
    /// is no error counterpart.
    pub fn returns(self, result: S::QueryResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query { response: result });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StateActor` if we are just
/// testing the *client* logic (e.g., `LedgerClient` result unwrapping).
///
/// Instead, we create a "Mock Client". This client sends messages to a channel
/// we control (`receiver`). We can then inspect the messages arriving on that
/// channel, assert they are correct, and answer them deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Command request
pub async fn expect_command<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Command,
    tokio::sync::oneshot::Sender<Result<S::CommandResult, ActorError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(S::Query, tokio::sync::oneshot::Sender<S::QueryResult>)> {
    match receiver.recv().await {
        Some(StateRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Gauge;

    #[derive(Debug)]
    enum GaugeCommand {
        Set(u32),
    }

    #[derive(Debug)]
    enum GaugeQuery {
        Value,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Gauge error")]
    struct GaugeError;

    #[async_trait]
    impl ActorState for Gauge {
        type Command = GaugeCommand;
        type CommandResult = u32;
        type Query = GaugeQuery;
        type QueryResult = u32;
        type Context = ();
        type Error = GaugeError;

        async fn handle_command(
            &mut self,
            command: GaugeCommand,
            _ctx: &Self::Context,
        ) -> Result<u32, GaugeError> {
            match command {
                GaugeCommand::Set(v) => Ok(v),
            }
        }

        fn handle_query(&self, query: GaugeQuery) -> u32 {
            match query {
                GaugeQuery::Value => 0,
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client_channel_helpers() {
        let (client, mut receiver) = create_mock_client::<Gauge>(10);

        let command_task = tokio::spawn(async move { client.command(GaugeCommand::Set(7)).await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert!(matches!(command, GaugeCommand::Set(7)));
        responder.send(Ok(7)).unwrap();

        let result = command_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Gauge>::new();

        mock.expect_command().return_ok(42);
        mock.expect_query().returns(42);

        let client = mock.client();

        let set = client.command(GaugeCommand::Set(42)).await.unwrap();
        assert_eq!(set, 42);

        let value = client.query(GaugeQuery::Value).await.unwrap();
        assert_eq!(value, 42);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Gauge>::new();
        mock.expect_command().return_err(ActorError::Closed);

        let client = mock.client();
        let result = client.command(GaugeCommand::Set(1)).await;
        assert!(matches!(result, Err(ActorError::Closed)));

        mock.verify();
    }
}
