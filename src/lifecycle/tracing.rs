//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Lifecycle events reach the log through [`TracingSink`](crate::framework::TracingSink),
//! one line per event, with the philosopher id and event name as structured fields.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle events only (default)
//! RUST_LOG=info cargo run -- processes.txt
//!
//! # Add state transitions and actor spawning
//! RUST_LOG=debug cargo run -- processes.txt
//!
//! # Every fork acquire/release as well
//! RUST_LOG=trace cargo run -- processes.txt
//! ```
//!
//! ## Sample Output
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Table launched seats=5 time_unit=1s
//! INFO Arrived philosopher=0 event="arrived"
//! INFO Thinking philosopher=0 event="thinking" duration=1.372s
//! INFO Waiting for forks philosopher=0 event="waiting_for_forks"
//! INFO Picked up fork philosopher=0 event="picked_up" side=left
//! INFO Picked up fork philosopher=0 event="picked_up" side=right
//! INFO Eating philosopher=0 event="consuming" duration=3s
//! INFO Released forks philosopher=0 event="released"
//! ```
//!
//! Interleaving between philosophers is not deterministic.

/// Initializes the tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and falls back to `info` when unset.
/// Output goes to standard output in the compact format without module paths.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // philosopher id is already a field
        .compact()
        .init();
}
