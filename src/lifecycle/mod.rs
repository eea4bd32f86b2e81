//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; **wiring them together** is where complexity
//! lives. This module is the conductor:
//!
//! 1. **Actor Creation** - instantiate the ledger and session actors
//! 2. **Seeding** - load the seed inventory and credential set ([`seed`])
//! 3. **Dependency Injection** - hand the session actor its store as context
//! 4. **Lifecycle Management** - spawn actors, coordinate graceful shutdown
//! 5. **Observability Setup** - initialize structured logging ([`tracing`])
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors drain** - remaining messages are processed, final state logged
//! 4. **Await completion** - join every actor task
//!
//! No messages are lost and both actors terminate cleanly.

pub mod seed;
pub mod stock_system;
pub mod tracing;

pub use seed::*;
pub use stock_system::*;
pub use self::tracing::setup_tracing;
