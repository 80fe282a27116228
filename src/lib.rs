#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Dining Philosophers
//!
//! > **A deadlock-free table of concurrent philosophers on Tokio.**
//!
//! N philosophers sit around a table with one fork between each pair of
//! neighbours. Each philosopher arrives, thinks for a while, picks up both
//! adjacent forks, eats, puts them down and leaves. Exactly once.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why an asymmetric tie-break?
//!
//! If every philosopher reached for the same side first, all of them could end
//! up holding one fork and waiting for the other forever (circular wait).
//! Here even ids take their left fork first and odd ids their right fork
//! first, so the waits can never close into a cycle. No central waiter, no
//! timeouts, no retries.
//!
//! What is guaranteed: mutual exclusion on every fork and eventual progress
//! for every philosopher. What is not: any bound on how long one waits.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Forks are guards
//! Holding a fork means owning a [`ForkGuard`](fork::ForkGuard). Dropping the
//! guard frees the fork, so a philosopher that is interrupted (or whose task is
//! aborted) can never leave a fork held behind it.
//!
//! ### 2. One task per philosopher
//! Each [`Philosopher`](philosopher::Philosopher) runs on its own Tokio task.
//! The fork ring is the only state they share.
//!
//! ### 3. Cooperative interruption
//! Every suspension point (arrival, thinking, each fork, eating) is raced
//! against a `CancellationToken`. An interrupted philosopher releases what it
//! holds and ends in the `Interrupted` state without affecting anyone else.
//!
//! ### 4. Observability
//! Lifecycle events go through an [`EventSink`](framework::EventSink). The
//! default sink writes structured `tracing` events; tests use the in-memory
//! [`RecordingSink`](framework::RecordingSink).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The [`Actor`](framework::Actor) trait, [`spawn`](framework::spawn) and
//! [`ActorHandle`](framework::ActorHandle), plus event sinks.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`DiningTable`](lifecycle::DiningTable) builds the ring, seats every
//! philosopher and launches them. It returns immediately after launch.
//!
//! ### 3. The Resources ([`fork`])
//! [`Fork`](fork::Fork) and [`ForkRing`](fork::ForkRing).
//!
//! ### 4. The Actor ([`philosopher`])
//! The state machine and the acquisition order.
//!
//! ### 5. Inputs ([`roster`], [`config`])
//! The `id arrival_delay hold_duration` table, and the length of a time-unit.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run -- processes.txt
//!
//! # Faster: 100 ms per time-unit
//! cargo run -- processes.txt --time-unit-ms 100
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config;
pub mod error;
pub mod fork;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod philosopher;
pub mod roster;

pub use error::SimulationError;
