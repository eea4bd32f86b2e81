//! Error types for the Ledger actor.

use thiserror::Error;

/// Errors that can occur while recording a stock movement.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// The movement names no product.
    #[error("Product name must not be empty")]
    EmptyProductName,

    /// The movement quantity is not a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The provided unit price is zero or negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An inbound movement introduced a new product without a unit price.
    #[error("Price is required for new product: {0}")]
    MissingPrice(String),

    /// An outbound movement named a product that is not in the inventory.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LedgerError {
    fn from(msg: String) -> Self {
        LedgerError::ActorCommunicationError(msg)
    }
}
