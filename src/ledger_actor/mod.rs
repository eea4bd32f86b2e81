//! # Ledger Actor
//!
//! This module implements the stock ledger: the authoritative product
//! inventory plus the append-only transaction history, and the rules that
//! keep them consistent.
//!
//! ## Overview
//!
//! The ledger exposes exactly one mutation, applying a
//! [`StockMovement`](crate::model::StockMovement), and a handful of
//! read-only queries. All validation happens before any state is touched,
//! so a rejected movement is a no-op.
//!
//! ## Structure
//!
//! - [`state`] - [`LedgerState`] and its [`ActorState`](crate::framework::ActorState) implementation
//! - [`requests`] - [`LedgerCommand`], [`LedgerQuery`] and [`StockSummary`]
//! - [`error`] - [`LedgerError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use wms_stock::ledger_actor;
//! use wms_stock::ledger_actor::state::LedgerState;
//! use wms_stock::model::StockMovement;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut state = LedgerState::new();
//!     state.seed_product("Widget", 29.99, 100);
//!
//!     // Create actor and client
//!     let (actor, client) = ledger_actor::new(state);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     // Record a movement
//!     let transaction = client.apply(StockMovement::outbound("Widget", 5)).await?;
//!     assert_eq!(transaction.quantity, 5);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod requests;
pub mod state;

pub use error::*;
pub use requests::*;

use crate::clients::LedgerClient;
use crate::framework::StateActor;
use state::LedgerState;

/// Creates a new Ledger actor around the given state, and its client.
pub fn new(state: LedgerState) -> (StateActor<LedgerState>, LedgerClient) {
    let (actor, generic_client) = StateActor::new(state, 32);
    let client = LedgerClient::new(generic_client);

    (actor, client)
}
