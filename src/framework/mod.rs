//! Generic actor plumbing.
//!
//! This module provides the building blocks that know nothing about forks or
//! philosophers: how an actor is launched, interrupted and joined, and where it
//! reports what it is doing.
//!
//! # Main Components
//!
//! - [`Actor`] - Trait with the single entry operation `run`
//! - [`spawn`] / [`ActorHandle`] - Launch an actor on its own task, interrupt it, join it
//! - [`EventSink`] / [`TracingSink`] - Where lifecycle events go
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`recorder`] for an in-memory sink that tests can assert against.

pub mod core;
pub mod recorder;

// Re-export core types for convenience
pub use self::core::*;
pub use recorder::RecordingSink;
