//! Commands and queries for the Ledger actor.
//!
//! This module defines the request surface of the ledger: the single mutating
//! command ([`LedgerCommand::Apply`]) and the read-only queries the dashboard
//! and product views are derived from.

use serde::Serialize;

use crate::model::{Product, StockMovement, Transaction};

/// A product counts as "low stock" when `0 < quantity <= LOW_STOCK_THRESHOLD`.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Mutating requests handled by the ledger.
///
/// The ledger deliberately has exactly one mutation: every change to the
/// inventory flows through a [`StockMovement`] and leaves a
/// [`Transaction`](crate::model::Transaction) in the history.
#[derive(Debug, Clone)]
pub enum LedgerCommand {
    /// Validate and apply a stock movement, returning the recorded transaction.
    Apply(StockMovement),
}

/// Read-only requests answered from the current ledger state.
#[derive(Debug, Clone)]
pub enum LedgerQuery {
    /// The full product inventory, in insertion order.
    Products,
    /// The transaction history, newest first.
    History,
    /// The aggregate dashboard figures.
    Summary,
}

/// Results from LedgerQueries - variants match 1:1 with LedgerQuery
#[derive(Debug, Clone)]
pub enum LedgerQueryResult {
    /// Result from the Products query
    Products(Vec<Product>),
    /// Result from the History query
    History(Vec<Transaction>),
    /// Result from the Summary query
    Summary(StockSummary),
}

/// Aggregate dashboard figures derived from the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockSummary {
    /// Number of distinct products on record.
    pub total_products: usize,
    /// Total units across all products.
    pub total_units: u64,
    /// Total inventory value, Σ price × quantity.
    pub total_value: f64,
    /// Products with `0 < quantity <= LOW_STOCK_THRESHOLD`.
    pub low_stock_products: usize,
}
