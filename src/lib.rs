#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # WMS Stock
//!
//! > **A warehouse stock ledger and session service built on message-passing actors.**
//!
//! This crate implements the core of a small warehouse-management system: an
//! authenticated user records inbound ("entrada") and outbound ("saída") stock
//! movements and reads the product inventory and the dashboard figures derived
//! from it. The presentation layer is an external collaborator; everything it
//! needs is exposed as typed, async, in-process clients.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why Actors for a Stock Ledger?
//!
//! The ledger has classic single-writer semantics: every movement must be
//! validated against the current inventory and applied atomically, and the
//! transaction history must stay append-only. Instead of wrapping shared state
//! in locks, each stateful component runs as an **actor**:
//!
//! - **Exclusive ownership**: the ledger state lives inside one Tokio task.
//! - **Sequential processing**: requests are applied one at a time, so a
//!   movement can never observe a half-applied inventory.
//! - **All-or-nothing**: a command either returns a recorded
//!   [`Transaction`](model::Transaction) or an error, and a failed command
//!   leaves the state untouched.
//!
//! ### Generics: The Power of `S`
//! You'll see [`StateActor<S: ActorState>`](framework::StateActor) behind both
//! actors. It means "I can host *any* state machine, as long as it defines its
//! commands and queries." The message loop is written **once** and reused for
//! the ledger and the session.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor runtime: [`ActorState`](framework::ActorState),
//! [`StateActor`](framework::StateActor), [`StateClient`](framework::StateClient),
//! and the [`framework::mock`] utilities for testing clients without actors.
//!
//! ### 2. The Domain ([`model`])
//! Pure data: [`Product`](model::Product), [`Transaction`](model::Transaction),
//! [`Identity`](model::Identity), [`Role`](model::Role).
//!
//! ### 3. The Implementation ([`ledger_actor`], [`session_actor`])
//! The two state machines built on the engine. The ledger owns the product
//! inventory plus the newest-first transaction history; the session owns the
//! credential set and the current identity, persisting it through a
//! [`SessionStore`](session_actor::store::SessionStore).
//!
//! ### 4. The Interface ([`clients`])
//! We don't expose raw message passing to the rest of the app.
//! [`LedgerClient`](clients::LedgerClient) and
//! [`SessionClient`](clients::SessionClient) wrap the generic client with
//! domain methods and domain error types.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`StockSystem`](lifecycle::StockSystem) seeds both actors, wires the
//! session store, spawns the tasks, and coordinates graceful shutdown.
//! [`lifecycle::seed`] holds the seed configuration,
//! [`lifecycle::tracing`] the logging setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod session_actor;
