//! # Session Client
//!
//! Provides a high-level API for interacting with the Session actor.
//! It wraps a `StateClient<SessionState>` and exposes domain-specific methods.

use tracing::{debug, instrument};

use crate::framework::{ActorError, StateClient};
use crate::model::{Identity, SignUp};
use crate::session_actor::state::SessionState;
use crate::session_actor::{
    SessionCommand, SessionCommandResult, SessionError, SessionQuery, SessionQueryResult,
};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: StateClient<SessionState>,
}

impl SessionClient {
    pub fn new(inner: StateClient<SessionState>) -> Self {
        Self { inner }
    }

    /// Recover the typed session error the state machine raised; anything
    /// else is a channel-level failure.
    fn map_error(e: ActorError) -> SessionError {
        match e {
            ActorError::State(inner) => match inner.downcast::<SessionError>() {
                Ok(err) => *err,
                Err(other) => SessionError::ActorCommunicationError(other.to_string()),
            },
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }

    /// Authenticate and make the matched identity current.
    ///
    /// Both fields are compared case-sensitively. A failed login reports
    /// [`SessionError::InvalidCredentials`] and changes nothing.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        debug!("Sending request");
        match self
            .inner
            .command(SessionCommand::Login {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
        {
            Ok(SessionCommandResult::LoggedIn(identity)) => Ok(identity),
            Ok(_) => unreachable!("Login command must return LoggedIn result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Create a new account and log in as it.
    #[instrument(skip(self, sign_up))]
    pub async fn register(&self, sign_up: SignUp) -> Result<Identity, SessionError> {
        debug!("Sending request");
        match self.inner.command(SessionCommand::Register(sign_up)).await {
            Ok(SessionCommandResult::Registered(identity)) => Ok(identity),
            Ok(_) => unreachable!("Register command must return Registered result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Drop the current identity and the persisted record.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        match self.inner.command(SessionCommand::Logout).await {
            Ok(SessionCommandResult::LoggedOut) => Ok(()),
            Ok(_) => unreachable!("Logout command must return LoggedOut result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Adopt the identity persisted by a previous process, if any.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> Result<Option<Identity>, SessionError> {
        debug!("Sending request");
        match self.inner.command(SessionCommand::Restore).await {
            Ok(SessionCommandResult::Restored(identity)) => Ok(identity),
            Ok(_) => unreachable!("Restore command must return Restored result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The currently authenticated identity, if any.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<Option<Identity>, SessionError> {
        debug!("Sending request");
        match self.inner.query(SessionQuery::CurrentUser).await {
            Ok(SessionQueryResult::CurrentUser(identity)) => Ok(identity),
            Ok(_) => unreachable!("CurrentUser query must return CurrentUser result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// How many accounts exist (seeded plus registered).
    #[instrument(skip(self))]
    pub async fn user_count(&self) -> Result<usize, SessionError> {
        debug!("Sending request");
        match self.inner.query(SessionQuery::UserCount).await {
            Ok(SessionQueryResult::UserCount(count)) => Ok(count),
            Ok(_) => unreachable!("UserCount query must return UserCount result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
