//! Error types for fork acquisition.

use thiserror::Error;

/// Errors that can occur while acquiring a fork.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForkError {
    /// The fork's permit was closed, so it can never be acquired again.
    #[error("Fork {0} is closed")]
    Closed(usize),
}
