//! Pure data structures shared by the ledger and session actors.

pub mod product;
pub mod transaction;
pub mod user;

pub use product::*;
pub use transaction::*;
pub use user::*;
