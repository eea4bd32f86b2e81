//! Error types for the Session actor.

use thiserror::Error;

use crate::model::Role;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No seeded or registered account matches the submitted credentials.
    /// Unknown email and wrong password are indistinguishable on purpose.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// The registration data is incomplete or malformed.
    #[error("Registration error: {0}")]
    Validation(String),

    /// The caller's role does not pass the gate for this operation.
    #[error("Permission denied: requires role {required}")]
    Forbidden { required: Role },

    /// The session store failed to read or write the persisted identity.
    #[error("Session store error: {0}")]
    Store(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
