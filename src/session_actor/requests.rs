//! Commands and queries for the Session actor.

use crate::model::{Identity, SignUp};

/// Mutating requests handled by the session.
#[derive(Clone)]
pub enum SessionCommand {
    /// Authenticate against the credential set (case-sensitive on both fields).
    Login { email: String, password: String },
    /// Create a new account and log in as it.
    Register(SignUp),
    /// Drop the current identity and the persisted record.
    Logout,
    /// Adopt the identity persisted by a previous process, if any.
    Restore,
}

// Hand-written so the password never reaches the debug logs.
impl std::fmt::Debug for SessionCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCommand::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            SessionCommand::Register(sign_up) => {
                f.debug_tuple("Register").field(sign_up).finish()
            }
            SessionCommand::Logout => write!(f, "Logout"),
            SessionCommand::Restore => write!(f, "Restore"),
        }
    }
}

/// Results from SessionCommands - variants match 1:1 with SessionCommand
#[derive(Debug, Clone)]
pub enum SessionCommandResult {
    /// Result from Login - the now-current identity
    LoggedIn(Identity),
    /// Result from Register - the newly created, now-current identity
    Registered(Identity),
    /// Result from Logout
    LoggedOut,
    /// Result from Restore - the recovered identity, if one was persisted
    Restored(Option<Identity>),
}

/// Read-only requests answered from the current session state.
#[derive(Debug, Clone)]
pub enum SessionQuery {
    /// The currently authenticated identity, if any.
    CurrentUser,
    /// How many accounts exist (seeded plus registered).
    UserCount,
}

/// Results from SessionQueries - variants match 1:1 with SessionQuery
#[derive(Debug, Clone)]
pub enum SessionQueryResult {
    /// Result from the CurrentUser query
    CurrentUser(Option<Identity>),
    /// Result from the UserCount query
    UserCount(usize),
}
