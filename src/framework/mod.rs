//! Generic actor framework for exclusively-owned state machines.
//!
//! This module provides the core building blocks for running a state machine
//! inside its own task and talking to it through typed commands and queries.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that state types implement to be hosted by an actor
//! - [`StateActor`] - Generic actor that owns the state and drains requests
//! - [`StateClient`] - Type-safe client half of the channel pair
//! - [`ActorError`] - Common channel-level errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
