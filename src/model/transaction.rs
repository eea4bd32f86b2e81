use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub u32);

impl From<u32> for TransactionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "txn_{}", self.0)
    }
}

/// Direction of a stock movement: "entrada" (receipt) or "saída" (issue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Inbound,
    Outbound,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Inbound => write!(f, "inbound"),
            TransactionKind::Outbound => write!(f, "outbound"),
        }
    }
}

/// One entry of the ledger history.
///
/// Immutable once recorded. `product_name` keeps the spelling the caller
/// submitted, not the canonical product name, and `price` is the unit price
/// at the time of the movement; later price changes don't rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub product_name: String,
    pub quantity: u32,
    pub kind: TransactionKind,
    pub price: f64,
    pub date: DateTime<Utc>,
}

/// Payload for recording a stock movement.
///
/// `unit_price` is optional: required when an inbound movement introduces a
/// new product, otherwise it overwrites the stored price (inbound) or is
/// ignored in favor of the current price (outbound default).
#[derive(Debug, Clone)]
pub struct StockMovement {
    pub product_name: String,
    pub quantity: u32,
    pub kind: TransactionKind,
    pub unit_price: Option<f64>,
}

impl StockMovement {
    /// Inbound movement against an existing product, keeping its price.
    pub fn inbound(product_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            kind: TransactionKind::Inbound,
            unit_price: None,
        }
    }

    /// Inbound movement carrying a unit price (required for new products).
    pub fn inbound_priced(product_name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            kind: TransactionKind::Inbound,
            unit_price: Some(unit_price),
        }
    }

    /// Outbound movement; the transaction records the product's current price.
    pub fn outbound(product_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            kind: TransactionKind::Outbound,
            unit_price: None,
        }
    }
}
