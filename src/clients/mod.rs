//! Type-safe client wrappers around the generic [`StateClient`](crate::framework::StateClient).
//!
//! The rest of the application never sees raw message passing: it talks to
//! [`LedgerClient`] and [`SessionClient`], which expose domain methods and
//! domain error types.

pub mod ledger_client;
pub mod session_client;

pub use ledger_client::LedgerClient;
pub use session_client::SessionClient;
