//! The session state machine: credential set plus current identity.
//!
//! The store injected as context receives every persistence side effect;
//! store writes happen *before* the in-memory state changes, so a failed
//! write rejects the command without leaving a half-applied session.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::framework::ActorState;
use crate::model::{Identity, Role, SignUp, UserId};

use super::error::SessionError;
use super::requests::{SessionCommand, SessionCommandResult, SessionQuery, SessionQueryResult};
use super::store::SessionStore;

/// Minimum accepted password length for new registrations.
const MIN_PASSWORD_CHARS: usize = 6;

/// One credential record. The password stays inside the actor; everything
/// that leaves the actor is the bare [`Identity`].
struct Account {
    identity: Identity,
    password: String,
}

/// The session state: all known accounts and the current identity.
pub struct SessionState {
    accounts: Vec<Account>,
    current: Option<Identity>,
    next_user_id: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Creates a session with no accounts and nobody logged in.
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            current: None,
            next_user_id: 1,
        }
    }

    /// Installs a pre-existing account. Used by the orchestrator to load the
    /// seed users before the actor starts.
    pub fn seed_account(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> UserId {
        let id = UserId(self.next_user_id);
        self.next_user_id += 1;
        self.accounts.push(Account {
            identity: Identity {
                id,
                name: name.into(),
                email: email.into(),
                role,
                created_at,
            },
            password: password.into(),
        });
        id
    }

    /// Case-sensitive exact match on email and password, as the credential
    /// set was captured. Returns the identity without mutating anything.
    fn authenticate(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        self.accounts
            .iter()
            .find(|a| a.identity.email == email && a.password == password)
            .map(|a| a.identity.clone())
            .ok_or(SessionError::InvalidCredentials)
    }

    /// Validates a registration and builds the identity, without mutating
    /// anything. Email uniqueness is a case-sensitive compare.
    fn admit(&self, sign_up: &SignUp) -> Result<Identity, SessionError> {
        if sign_up.name.trim().is_empty()
            || sign_up.email.trim().is_empty()
            || sign_up.password.is_empty()
        {
            return Err(SessionError::Validation(
                "name, email and password are required".to_string(),
            ));
        }
        if sign_up.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(SessionError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }
        if self.accounts.iter().any(|a| a.identity.email == sign_up.email) {
            return Err(SessionError::EmailTaken(sign_up.email.clone()));
        }
        Ok(Identity {
            id: UserId(self.next_user_id),
            name: sign_up.name.clone(),
            email: sign_up.email.clone(),
            role: sign_up.role,
            created_at: Utc::now(),
        })
    }
}

#[async_trait]
impl ActorState for SessionState {
    type Command = SessionCommand;
    type CommandResult = SessionCommandResult;
    type Query = SessionQuery;
    type QueryResult = SessionQueryResult;
    type Context = Arc<dyn SessionStore>;
    type Error = SessionError;

    async fn handle_command(
        &mut self,
        command: SessionCommand,
        store: &Self::Context,
    ) -> Result<SessionCommandResult, SessionError> {
        match command {
            SessionCommand::Login { email, password } => {
                let identity = self.authenticate(&email, &password)?;
                store
                    .save(&identity)
                    .await
                    .map_err(|e| SessionError::Store(e.to_string()))?;
                self.current = Some(identity.clone());
                Ok(SessionCommandResult::LoggedIn(identity))
            }
            SessionCommand::Register(sign_up) => {
                let identity = self.admit(&sign_up)?;
                store
                    .save(&identity)
                    .await
                    .map_err(|e| SessionError::Store(e.to_string()))?;
                self.next_user_id += 1;
                self.accounts.push(Account {
                    identity: identity.clone(),
                    password: sign_up.password,
                });
                self.current = Some(identity.clone());
                Ok(SessionCommandResult::Registered(identity))
            }
            SessionCommand::Logout => {
                store
                    .clear()
                    .await
                    .map_err(|e| SessionError::Store(e.to_string()))?;
                self.current = None;
                Ok(SessionCommandResult::LoggedOut)
            }
            SessionCommand::Restore => {
                let saved = store
                    .load()
                    .await
                    .map_err(|e| SessionError::Store(e.to_string()))?;
                self.current = saved.clone();
                Ok(SessionCommandResult::Restored(saved))
            }
        }
    }

    fn handle_query(&self, query: SessionQuery) -> SessionQueryResult {
        match query {
            SessionQuery::CurrentUser => SessionQueryResult::CurrentUser(self.current.clone()),
            SessionQuery::UserCount => SessionQueryResult::UserCount(self.accounts.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_actor::store::MemorySessionStore;
    use chrono::TimeZone;

    fn seeded() -> SessionState {
        let mut state = SessionState::new();
        state.seed_account(
            "Administrador",
            "admin@wms.com",
            "admin123",
            Role::Admin,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        state.seed_account(
            "João Operador",
            "operador@wms.com",
            "op123",
            Role::Operator,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        );
        state
    }

    fn store() -> Arc<dyn SessionStore> {
        Arc::new(MemorySessionStore::new())
    }

    #[tokio::test]
    async fn test_login_sets_current_and_persists() {
        let mut state = seeded();
        let store = store();

        let result = state
            .handle_command(
                SessionCommand::Login {
                    email: "admin@wms.com".to_string(),
                    password: "admin123".to_string(),
                },
                &store,
            )
            .await
            .unwrap();

        let identity = match result {
            SessionCommandResult::LoggedIn(identity) => identity,
            other => panic!("Expected LoggedIn, got {:?}", other),
        };
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(state.current.as_ref().unwrap().email, "admin@wms.com");
        assert_eq!(store.load().await.unwrap().unwrap().email, "admin@wms.com");
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let mut state = seeded();
        let store = store();

        let err = state
            .handle_command(
                SessionCommand::Login {
                    email: "Admin@wms.com".to_string(),
                    password: "admin123".to_string(),
                },
                &store,
            )
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::InvalidCredentials);
        assert!(state.current.is_none());
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let mut state = seeded();
        let store = store();

        let err = state
            .handle_command(
                SessionCommand::Register(SignUp {
                    name: "Clone".to_string(),
                    email: "admin@wms.com".to_string(),
                    password: "secret99".to_string(),
                    role: Role::Operator,
                }),
                &store,
            )
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::EmailTaken("admin@wms.com".to_string()));
        assert_eq!(state.accounts.len(), 2);
        assert!(state.current.is_none());
    }

    #[tokio::test]
    async fn test_register_validates_fields() {
        let mut state = seeded();
        let store = store();

        let err = state
            .handle_command(
                SessionCommand::Register(SignUp {
                    name: "Maria".to_string(),
                    email: "maria@wms.com".to_string(),
                    password: "short".to_string(),
                    role: Role::Operator,
                }),
                &store,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Validation(_)));
        assert_eq!(state.accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_register_logs_in_as_new_identity() {
        let mut state = seeded();
        let store = store();

        let result = state
            .handle_command(
                SessionCommand::Register(SignUp {
                    name: "Maria".to_string(),
                    email: "maria@wms.com".to_string(),
                    password: "secret99".to_string(),
                    role: Role::Operator,
                }),
                &store,
            )
            .await
            .unwrap();

        let identity = match result {
            SessionCommandResult::Registered(identity) => identity,
            other => panic!("Expected Registered, got {:?}", other),
        };
        assert_eq!(identity.id, UserId(3));
        assert_eq!(state.accounts.len(), 3);
        assert_eq!(state.current.as_ref().unwrap().email, "maria@wms.com");

        // The fresh credentials work for a later login.
        state
            .handle_command(
                SessionCommand::Login {
                    email: "maria@wms.com".to_string(),
                    password: "secret99".to_string(),
                },
                &store,
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_logout_clears_current_and_store() {
        let mut state = seeded();
        let store = store();

        state
            .handle_command(
                SessionCommand::Login {
                    email: "operador@wms.com".to_string(),
                    password: "op123".to_string(),
                },
                &store,
            )
            .await
            .unwrap();

        state
            .handle_command(SessionCommand::Logout, &store)
            .await
            .unwrap();
        assert!(state.current.is_none());
        assert_eq!(store.load().await.unwrap(), None);

        // Logging out while anonymous is a harmless no-op.
        state
            .handle_command(SessionCommand::Logout, &store)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_restore_adopts_persisted_identity() {
        let store = store();
        {
            let mut first = seeded();
            first
                .handle_command(
                    SessionCommand::Login {
                        email: "admin@wms.com".to_string(),
                        password: "admin123".to_string(),
                    },
                    &store,
                )
                .await
                .unwrap();
        }

        // A fresh process restores the parked identity without credentials.
        let mut second = seeded();
        let result = second
            .handle_command(SessionCommand::Restore, &store)
            .await
            .unwrap();
        match result {
            SessionCommandResult::Restored(Some(identity)) => {
                assert_eq!(identity.email, "admin@wms.com")
            }
            other => panic!("Expected a restored identity, got {:?}", other),
        }
        assert_eq!(second.current.as_ref().unwrap().email, "admin@wms.com");
    }
}
