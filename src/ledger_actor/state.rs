//! The ledger state machine: product inventory plus transaction history.
//!
//! This module contains the [`ActorState`] implementation that lets the
//! ledger be hosted by the generic [`StateActor`](crate::framework::StateActor).
//!
//! Invariants enforced here:
//!
//! - product quantities never go negative;
//! - the history is append-only and ordered newest first;
//! - a rejected movement leaves both collections untouched.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;

use crate::framework::ActorState;
use crate::model::{Product, ProductId, StockMovement, Transaction, TransactionId, TransactionKind};

use super::error::LedgerError;
use super::requests::{LedgerCommand, LedgerQuery, LedgerQueryResult, StockSummary, LOW_STOCK_THRESHOLD};

/// The authoritative inventory state.
///
/// Products are kept in insertion order and matched by case-insensitive name;
/// at most one product per name is assumed, so the first match wins. The
/// history is a deque so prepending stays cheap.
pub struct LedgerState {
    products: Vec<Product>,
    transactions: VecDeque<Transaction>,
    next_product_id: u32,
    next_transaction_id: u32,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerState {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            transactions: VecDeque::new(),
            next_product_id: 1,
            next_transaction_id: 1,
        }
    }

    /// Installs a product without recording a transaction. Used by the
    /// orchestrator to load the seed inventory before the actor starts.
    pub fn seed_product(
        &mut self,
        name: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> ProductId {
        let id = ProductId(self.next_product_id);
        self.next_product_id += 1;
        self.products.push(Product::new(id, name, price, quantity));
        id
    }

    fn find_product(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.matches_name(name))
    }

    /// Validates and applies a movement, returning the recorded transaction.
    ///
    /// Validation is complete before the first mutation, so an `Err` means
    /// nothing changed.
    fn apply(&mut self, movement: StockMovement) -> Result<Transaction, LedgerError> {
        let StockMovement {
            product_name,
            quantity,
            kind,
            unit_price,
        } = movement;

        if product_name.trim().is_empty() {
            return Err(LedgerError::EmptyProductName);
        }
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity(quantity));
        }
        if let Some(price) = unit_price {
            if price <= 0.0 {
                return Err(LedgerError::InvalidPrice(price));
            }
        }

        let found = self.find_product(&product_name);

        // The unit price recorded on the transaction: the submitted price if
        // any, otherwise the product's current price.
        let recorded_price = match kind {
            TransactionKind::Inbound => match found {
                Some(index) => {
                    let price = unit_price.unwrap_or(self.products[index].price);
                    self.products[index].quantity += quantity;
                    if let Some(new_price) = unit_price {
                        // Latest write wins; prior prices live on in the history.
                        self.products[index].price = new_price;
                    }
                    price
                }
                None => {
                    let price = unit_price
                        .ok_or_else(|| LedgerError::MissingPrice(product_name.clone()))?;
                    let id = ProductId(self.next_product_id);
                    self.next_product_id += 1;
                    self.products
                        .push(Product::new(id, product_name.clone(), price, quantity));
                    price
                }
            },
            TransactionKind::Outbound => match found {
                Some(index) => {
                    let available = self.products[index].quantity;
                    if quantity > available {
                        return Err(LedgerError::InsufficientStock {
                            requested: quantity,
                            available,
                        });
                    }
                    self.products[index].quantity -= quantity;
                    unit_price.unwrap_or(self.products[index].price)
                }
                None => return Err(LedgerError::NotFound(product_name)),
            },
        };

        let transaction = Transaction {
            id: TransactionId(self.next_transaction_id),
            product_name,
            quantity,
            kind,
            price: recorded_price,
            date: Utc::now(),
        };
        self.next_transaction_id += 1;
        self.transactions.push_front(transaction.clone());

        Ok(transaction)
    }

    fn summary(&self) -> StockSummary {
        StockSummary {
            total_products: self.products.len(),
            total_units: self.products.iter().map(|p| u64::from(p.quantity)).sum(),
            total_value: self
                .products
                .iter()
                .map(|p| p.price * f64::from(p.quantity))
                .sum(),
            low_stock_products: self
                .products
                .iter()
                .filter(|p| p.quantity > 0 && p.quantity <= LOW_STOCK_THRESHOLD)
                .count(),
        }
    }
}

#[async_trait]
impl ActorState for LedgerState {
    type Command = LedgerCommand;
    type CommandResult = Transaction;
    type Query = LedgerQuery;
    type QueryResult = LedgerQueryResult;
    type Context = ();
    type Error = LedgerError;

    async fn handle_command(
        &mut self,
        command: LedgerCommand,
        _ctx: &Self::Context,
    ) -> Result<Transaction, LedgerError> {
        match command {
            LedgerCommand::Apply(movement) => self.apply(movement),
        }
    }

    fn handle_query(&self, query: LedgerQuery) -> LedgerQueryResult {
        match query {
            LedgerQuery::Products => LedgerQueryResult::Products(self.products.clone()),
            LedgerQuery::History => {
                LedgerQueryResult::History(self.transactions.iter().cloned().collect())
            }
            LedgerQuery::Summary => LedgerQueryResult::Summary(self.summary()),
        }
    }
}
