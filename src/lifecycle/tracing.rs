//! Observability setup for the whole system.
//!
//! Structured logging via the `tracing` crate: actor lifecycle events at
//! `info`, full request payloads at `debug`, rejected commands at `warn`.
//! Levels are controlled with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! RUST_LOG=wms_stock::framework=debug cargo run   # Filter to the engine
//! ```
//!
//! Payload fields use the `?value` capture syntax, so a movement shows up as
//! a structured `command=Apply(StockMovement { .. })` field. Credentials are
//! redacted before they reach the subscriber (see the hand-written `Debug`
//! impls on the session commands).

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use state_type instead
        .compact() // Compact format shows spans inline (e.g., "stock_intake:apply")
        .init();
}
