//! # Ledger Client
//!
//! Provides a high-level API for interacting with the Ledger actor.
//! It wraps a `StateClient<LedgerState>` and exposes domain-specific methods.

use tracing::{debug, instrument};

use crate::framework::{ActorError, StateClient};
use crate::ledger_actor::state::LedgerState;
use crate::ledger_actor::{LedgerCommand, LedgerError, LedgerQuery, LedgerQueryResult, StockSummary};
use crate::model::{Product, StockMovement, Transaction};

/// Client for interacting with the Ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    inner: StateClient<LedgerState>,
}

impl LedgerClient {
    pub fn new(inner: StateClient<LedgerState>) -> Self {
        Self { inner }
    }

    /// Recover the typed ledger error the state machine raised; anything else
    /// is a channel-level failure.
    fn map_error(e: ActorError) -> LedgerError {
        match e {
            ActorError::State(inner) => match inner.downcast::<LedgerError>() {
                Ok(err) => *err,
                Err(other) => LedgerError::ActorCommunicationError(other.to_string()),
            },
            other => LedgerError::ActorCommunicationError(other.to_string()),
        }
    }

    /// Validate and apply a stock movement.
    ///
    /// Returns the recorded transaction, or an error describing why the
    /// movement was rejected (in which case the inventory is unchanged).
    #[instrument(skip(self))]
    pub async fn apply(&self, movement: StockMovement) -> Result<Transaction, LedgerError> {
        debug!("Sending request");
        self.inner
            .command(LedgerCommand::Apply(movement))
            .await
            .map_err(Self::map_error)
    }

    /// The full product inventory, in insertion order.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, LedgerError> {
        debug!("Sending request");
        match self.inner.query(LedgerQuery::Products).await {
            Ok(LedgerQueryResult::Products(products)) => Ok(products),
            Ok(_) => unreachable!("Products query must return Products result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The transaction history, newest first.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<Transaction>, LedgerError> {
        debug!("Sending request");
        match self.inner.query(LedgerQuery::History).await {
            Ok(LedgerQueryResult::History(transactions)) => Ok(transactions),
            Ok(_) => unreachable!("History query must return History result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The aggregate dashboard figures.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<StockSummary, LedgerError> {
        debug!("Sending request");
        match self.inner.query(LedgerQuery::Summary).await {
            Ok(LedgerQueryResult::Summary(summary)) => Ok(summary),
            Ok(_) => unreachable!("Summary query must return Summary result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
