//! # Session Actor
//!
//! This module implements the identity/session component: a fixed-plus-
//! registered credential set, the currently authenticated identity, and the
//! persistence of that identity across restarts.
//!
//! ## Overview
//!
//! The session actor owns every account record (passwords never leave it)
//! and hands out bare [`Identity`](crate::model::Identity) values. Login and
//! duplicate-email checks compare emails case-sensitively, matching how the
//! credential set was captured.
//!
//! ## Structure
//!
//! - [`state`] - [`SessionState`] and its [`ActorState`](crate::framework::ActorState) implementation
//! - [`requests`] - [`SessionCommand`], [`SessionQuery`] and their results
//! - [`store`] - the [`SessionStore`] context injected into the actor
//! - [`error`] - [`SessionError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//! - [`authorize()`] - the role gate applied at the caller boundary
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use wms_stock::model::Role;
//! use wms_stock::session_actor;
//! use wms_stock::session_actor::state::SessionState;
//! use wms_stock::session_actor::store::MemorySessionStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut state = SessionState::new();
//!     state.seed_account("Alice", "alice@wms.com", "secret99", Role::Admin, Utc::now());
//!
//!     // Create actor and client
//!     let (actor, client) = session_actor::new(state);
//!
//!     // Start the actor with its store injected as context
//!     tokio::spawn(actor.run(Arc::new(MemorySessionStore::new())));
//!
//!     let identity = client.login("alice@wms.com", "secret99").await?;
//!     assert_eq!(identity.role, Role::Admin);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod requests;
pub mod state;
pub mod store;

pub use error::*;
pub use requests::*;

use crate::clients::SessionClient;
use crate::framework::StateActor;
use crate::model::{Identity, Role};
use state::SessionState;

/// Creates a new Session actor around the given state, and its client.
pub fn new(state: SessionState) -> (StateActor<SessionState>, SessionClient) {
    let (actor, generic_client) = StateActor::new(state, 32);
    let client = SessionClient::new(generic_client);

    (actor, client)
}

/// The role gate for operations tagged with a required role.
///
/// Kept as one explicit predicate instead of conditionals scattered through
/// the callers. Recording inbound stock is the admin-gated operation;
/// outbound and all reads are open to any authenticated identity.
pub fn authorize(identity: &Identity, required: Role) -> Result<(), SessionError> {
    if identity.role.permits(required) {
        Ok(())
    } else {
        Err(SessionError::Forbidden { required })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use chrono::Utc;

    fn identity(role: Role) -> Identity {
        Identity {
            id: UserId(1),
            name: "Test".to_string(),
            email: "test@wms.com".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_authorize_admin_gate() {
        assert!(authorize(&identity(Role::Admin), Role::Admin).is_ok());
        assert_eq!(
            authorize(&identity(Role::Operator), Role::Admin).unwrap_err(),
            SessionError::Forbidden {
                required: Role::Admin
            }
        );
    }

    #[test]
    fn test_authorize_operator_gate_admits_admin() {
        assert!(authorize(&identity(Role::Operator), Role::Operator).is_ok());
        assert!(authorize(&identity(Role::Admin), Role::Operator).is_ok());
    }
}
