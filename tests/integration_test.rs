use std::sync::Arc;

use wms_stock::ledger_actor::LedgerError;
use wms_stock::lifecycle::StockSystem;
use wms_stock::model::{Role, SignUp, StockMovement, TransactionKind};
use wms_stock::session_actor::authorize;
use wms_stock::session_actor::store::MemorySessionStore;
use wms_stock::session_actor::SessionError;

/// Full end-to-end integration test with both real actors.
/// This tests the entire system working together.
#[tokio::test]
async fn test_full_stock_system_integration() {
    // Create the full system with the default seed
    let system = StockSystem::new();

    // Authenticate as the seeded administrator
    let identity = system
        .session_client
        .login("admin@wms.com", "admin123")
        .await
        .expect("Failed to log in");
    assert_eq!(identity.role, Role::Admin);
    assert!(authorize(&identity, Role::Admin).is_ok());

    // Verify the seeded inventory
    let products = system.ledger_client.products().await.unwrap();
    assert_eq!(products.len(), 3);
    let summary = system.ledger_client.summary().await.unwrap();
    assert_eq!(summary.total_products, 3);
    assert_eq!(summary.total_units, 43);
    assert!((summary.total_value - 29_937.5).abs() < 1e-9);
    assert_eq!(summary.low_stock_products, 0);

    // Overdrawing is rejected and changes nothing
    let err = system
        .ledger_client
        .apply(StockMovement::outbound("Mouse Logitech", 30))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientStock {
            requested: 30,
            available: 25
        }
    );
    let products = system.ledger_client.products().await.unwrap();
    assert_eq!(products[1].quantity, 25);
    assert!(system.ledger_client.history().await.unwrap().is_empty());

    // A covered outbound movement is applied and recorded
    let transaction = system
        .ledger_client
        .apply(StockMovement::outbound("Mouse Logitech", 10))
        .await
        .unwrap();
    assert_eq!(transaction.kind, TransactionKind::Outbound);
    assert_eq!(transaction.quantity, 10);
    assert_eq!(transaction.price, 85.5);
    let products = system.ledger_client.products().await.unwrap();
    assert_eq!(products[1].quantity, 15);

    // Inbound matches case-insensitively and the submitted price wins
    let transaction = system
        .ledger_client
        .apply(StockMovement::inbound_priced("mouse logitech", 5, 90.0))
        .await
        .unwrap();
    assert_eq!(transaction.product_name, "mouse logitech");
    let products = system.ledger_client.products().await.unwrap();
    assert_eq!(products[1].name, "Mouse Logitech");
    assert_eq!(products[1].quantity, 20);
    assert_eq!(products[1].price, 90.0);

    // A new product without a price is rejected and not created
    let err = system
        .ledger_client
        .apply(StockMovement::inbound("Webcam HD", 4))
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::MissingPrice("Webcam HD".to_string()));
    assert_eq!(system.ledger_client.products().await.unwrap().len(), 3);

    // With a price, the first inbound creates the product
    system
        .ledger_client
        .apply(StockMovement::inbound_priced("Webcam HD", 4, 199.9))
        .await
        .unwrap();
    let products = system.ledger_client.products().await.unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(products[3].name, "Webcam HD");

    // History holds every applied movement, newest first
    let history = system.ledger_client.history().await.unwrap();
    assert_eq!(history.len(), 3);
    let ids: Vec<u32> = history.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    // Dashboard figures follow the mutated inventory
    let summary = system.ledger_client.summary().await.unwrap();
    assert_eq!(summary.total_products, 4);
    assert_eq!(summary.total_units, 42);
    assert!((summary.total_value - 30_399.6).abs() < 1e-9);
    assert_eq!(summary.low_stock_products, 1); // the 4-unit webcam

    // Registration rejects a taken email and leaves the accounts alone
    let err = system
        .session_client
        .register(SignUp {
            name: "Impostor".to_string(),
            email: "admin@wms.com".to_string(),
            password: "secret99".to_string(),
            role: Role::Operator,
        })
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::EmailTaken("admin@wms.com".to_string()));
    assert_eq!(system.session_client.user_count().await.unwrap(), 2);

    // A fresh registration logs in as the new identity
    let maria = system
        .session_client
        .register(SignUp {
            name: "Maria".to_string(),
            email: "maria@wms.com".to_string(),
            password: "secret99".to_string(),
            role: Role::Operator,
        })
        .await
        .unwrap();
    assert_eq!(system.session_client.user_count().await.unwrap(), 3);
    let current = system.session_client.current_user().await.unwrap();
    assert_eq!(current, Some(maria));

    // Logout returns to anonymous
    system.session_client.logout().await.unwrap();
    assert_eq!(system.session_client.current_user().await.unwrap(), None);

    // Graceful shutdown
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Test concurrent outbound movements to verify the single-writer ledger
/// never oversells.
#[tokio::test]
async fn test_concurrent_outbound_never_oversells() {
    let system = StockSystem::new();

    // Stock a product with exactly 20 units
    system
        .ledger_client
        .apply(StockMovement::inbound_priced("Limited Widget", 20, 10.0))
        .await
        .unwrap();

    // Issue 12 concurrent withdrawals of 2 units each (24 > 20)
    let mut handles = vec![];
    for _i in 0..12 {
        let ledger_client = system.ledger_client.clone();
        let handle = tokio::spawn(async move {
            ledger_client
                .apply(StockMovement::outbound("Limited Widget", 2))
                .await
        });
        handles.push(handle);
    }

    let mut successful = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(LedgerError::InsufficientStock { .. }) => failed += 1,
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    // Exactly 10 withdrawals fit (20 stock / 2 per withdrawal)
    assert_eq!(successful, 10, "Expected exactly 10 successful withdrawals");
    assert_eq!(failed, 2, "Expected the overflow withdrawals to fail");

    // Verify final stock is zero and every success left a history entry
    let products = system.ledger_client.products().await.unwrap();
    let widget = products.iter().find(|p| p.name == "Limited Widget").unwrap();
    assert_eq!(widget.quantity, 0, "All stock should be consumed");
    let history = system.ledger_client.history().await.unwrap();
    assert_eq!(history.len(), 11); // 1 inbound + 10 outbound

    system.shutdown().await.unwrap();
}

/// The persisted identity survives a full system restart through the store.
#[tokio::test]
async fn test_session_persists_across_systems() {
    let store = Arc::new(MemorySessionStore::new());

    let first = StockSystem::with_store(store.clone());
    first
        .session_client
        .login("operador@wms.com", "op123")
        .await
        .unwrap();
    first.shutdown().await.unwrap();

    // A fresh system adopts the parked identity without credentials
    let second = StockSystem::with_store(store.clone());
    let restored = second.session_client.restore().await.unwrap();
    let identity = restored.expect("Expected a restored identity");
    assert_eq!(identity.email, "operador@wms.com");
    assert_eq!(identity.role, Role::Operator);
    assert_eq!(
        second.session_client.current_user().await.unwrap(),
        Some(identity.clone())
    );

    // The operator passes the operator gate but not the admin gate
    assert!(authorize(&identity, Role::Operator).is_ok());
    assert_eq!(
        authorize(&identity, Role::Admin).unwrap_err(),
        SessionError::Forbidden {
            required: Role::Admin
        }
    );

    // Logout clears the store; the next restart is anonymous
    second.session_client.logout().await.unwrap();
    second.shutdown().await.unwrap();

    let third = StockSystem::with_store(store);
    assert_eq!(third.session_client.restore().await.unwrap(), None);
    third.shutdown().await.unwrap();
}

/// Wrong credentials leave the session anonymous.
#[tokio::test]
async fn test_failed_login_sets_no_identity() {
    let system = StockSystem::new();

    let err = system
        .session_client
        .login("admin@wms.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::InvalidCredentials);
    assert_eq!(system.session_client.current_user().await.unwrap(), None);

    system.shutdown().await.unwrap();
}
