use std::sync::Arc;
use tracing::{error, info};

use crate::clients::{LedgerClient, SessionClient};
use crate::ledger_actor;
use crate::ledger_actor::state::LedgerState;
use crate::lifecycle::seed::SeedData;
use crate::session_actor;
use crate::session_actor::state::SessionState;
use crate::session_actor::store::{MemorySessionStore, SessionStore};

/// The main runtime orchestrator for the warehouse stock system.
///
/// `StockSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Seeding**: Installing the seed inventory and credential set
/// - **Dependency Wiring**: Injecting the session store into the session actor
///
/// # Architecture
///
/// The system consists of two actors:
/// - **Ledger Actor**: Owns the product inventory and the transaction history
/// - **Session Actor**: Owns the credential set and the current identity
///
/// They never talk to each other; role gating happens at the caller boundary
/// via [`session_actor::authorize`].
///
/// # Example
///
/// ```ignore
/// let system = StockSystem::new();
///
/// // Adopt a persisted session, or authenticate
/// let identity = match system.session_client.restore().await? {
///     Some(identity) => identity,
///     None => system.session_client.login("admin@wms.com", "admin123").await?,
/// };
///
/// // Record a movement and read the dashboard
/// system.ledger_client.apply(StockMovement::outbound("Mouse Logitech", 10)).await?;
/// let summary = system.ledger_client.summary().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct StockSystem {
    /// Client for interacting with the Ledger actor
    pub ledger_client: LedgerClient,

    /// Client for interacting with the Session actor
    pub session_client: SessionClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for StockSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StockSystem {
    /// Creates a system with the default seed and a volatile in-memory
    /// session store. Suitable for tests and throwaway runs.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemorySessionStore::new()))
    }

    /// Creates a system with the default seed and the given session store.
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self::with_seed(SeedData::default(), store)
    }

    /// Creates and initializes a `StockSystem` with all actors running.
    ///
    /// This method:
    /// 1. Builds the ledger state from the seed products
    /// 2. Builds the session state from the seed users
    /// 3. Spawns each actor in its own Tokio task, injecting the session store
    ///
    /// The caller decides whether to adopt a persisted session afterwards via
    /// `session_client.restore()`.
    pub fn with_seed(seed: SeedData, store: Arc<dyn SessionStore>) -> Self {
        // =====================================================================
        // 1. Setup Ledger Actor
        // =====================================================================

        let mut ledger_state = LedgerState::new();
        for product in &seed.products {
            ledger_state.seed_product(product.name.as_str(), product.price, product.quantity);
        }
        info!(products = seed.products.len(), "Seeded inventory");

        let (ledger_actor, ledger_client) = ledger_actor::new(ledger_state);
        let ledger_handle = tokio::spawn(ledger_actor.run(()));

        // =====================================================================
        // 2. Setup Session Actor (with the store injected as context)
        // =====================================================================

        let mut session_state = SessionState::new();
        for user in &seed.users {
            session_state.seed_account(
                user.name.as_str(),
                user.email.as_str(),
                user.password.as_str(),
                user.role,
                user.created_at,
            );
        }
        info!(users = seed.users.len(), "Seeded credential set");

        let (session_actor, session_client) = session_actor::new(session_state);
        let session_handle = tokio::spawn(session_actor.run(store));

        Self {
            ledger_client,
            session_client,
            handles: vec![ledger_handle, session_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue
    /// and exits its event loop, then we await the tasks.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.ledger_client);
        drop(self.session_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
