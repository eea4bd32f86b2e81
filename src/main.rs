//! # WMS Stock Demo
//!
//! A walkthrough of the warehouse stock system:
//! 1. Restoring or establishing a session.
//! 2. Recording inbound and outbound movements (including a rejected one).
//! 3. Reading the dashboard summary and the recent history.
//!
//! Run with `RUST_LOG=info cargo run` for compact logs, `RUST_LOG=debug` for
//! full payloads.

use std::sync::Arc;

use tracing::{error, info, warn, Instrument};
use wms_stock::lifecycle::{setup_tracing, StockSystem};
use wms_stock::model::{Role, StockMovement};
use wms_stock::session_actor::authorize;
use wms_stock::session_actor::store::FileSessionStore;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting warehouse stock system");

    // Sessions survive restarts through a single JSON record.
    let session_path = std::env::temp_dir().join("wms-user.json");
    let store = Arc::new(FileSessionStore::new(&session_path));
    let system = StockSystem::with_store(store);

    // Adopt a previous session if one was left behind, otherwise log in.
    let span = tracing::info_span!("sign_in");
    let identity = async {
        match system
            .session_client
            .restore()
            .await
            .map_err(|e| e.to_string())?
        {
            Some(identity) => {
                info!(user = %identity.email, role = %identity.role, "Restored previous session");
                Ok::<_, String>(identity)
            }
            None => {
                info!("No saved session, authenticating");
                system
                    .session_client
                    .login("admin@wms.com", "admin123")
                    .await
                    .map_err(|e| e.to_string())
            }
        }
    }
    .instrument(span)
    .await?;

    info!(user = %identity.email, role = %identity.role, "Signed in");

    // Inbound movements are the admin-gated operation.
    authorize(&identity, Role::Admin).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("stock_intake");
    async {
        // Replenish an existing product, updating its price.
        let transaction = system
            .ledger_client
            .apply(StockMovement::inbound_priced("Mouse Logitech", 10, 90.0))
            .await
            .map_err(|e| e.to_string())?;
        info!(transaction = %transaction.id, quantity = transaction.quantity, "Recorded inbound");

        // First inbound for an unseen name creates the product.
        let transaction = system
            .ledger_client
            .apply(StockMovement::inbound_priced("Webcam HD", 4, 199.9))
            .await
            .map_err(|e| e.to_string())?;
        info!(transaction = %transaction.id, product = %transaction.product_name, "Registered new product");

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("stock_issue");
    async {
        let transaction = system
            .ledger_client
            .apply(StockMovement::outbound("Notebook Dell", 2))
            .await
            .map_err(|e| e.to_string())?;
        info!(transaction = %transaction.id, quantity = transaction.quantity, "Recorded outbound");

        // Overdrawing is rejected and leaves the inventory untouched.
        match system
            .ledger_client
            .apply(StockMovement::outbound("Teclado Mecânico", 100))
            .await
        {
            Ok(_) => error!("Overdraw was unexpectedly accepted"),
            Err(e) => warn!(error = %e, "Movement rejected"),
        }

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Dashboard figures, derived from the current inventory.
    let summary = system
        .ledger_client
        .summary()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total_products = summary.total_products,
        total_units = summary.total_units,
        total_value = summary.total_value,
        low_stock = summary.low_stock_products,
        "Dashboard summary"
    );

    let history = system
        .ledger_client
        .history()
        .await
        .map_err(|e| e.to_string())?;
    for transaction in history.iter().take(5) {
        info!(
            id = %transaction.id,
            kind = %transaction.kind,
            product = %transaction.product_name,
            quantity = transaction.quantity,
            price = transaction.price,
            "Recent transaction"
        );
    }

    system
        .session_client
        .logout()
        .await
        .map_err(|e| e.to_string())?;
    info!("Signed out");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
