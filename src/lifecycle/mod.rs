//! Simulation orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running a table of philosophers:
//!
//! - **Seating**: building the fork ring and wiring each philosopher to its two forks
//! - **Launching**: one Tokio task per philosopher, detached
//! - **Interrupting and joining**: optional, for callers that want to stop or observe the run
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`DiningTable`] - The orchestrator that owns the ring and the philosopher handles
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod dining_table;
pub mod tracing;

pub use dining_table::*;
pub use self::tracing::*;
