//! Error types for the philosopher actor.

use crate::fork::ForkError;
use crate::model::PhilosopherId;
use thiserror::Error;

/// Errors that end a philosopher's cycle early.
///
/// Interruption is not one of them: it is an expected
/// [`Outcome`](crate::model::Outcome).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PhilosopherError {
    /// A fork could not be acquired. Forks already held were released.
    #[error("Philosopher {id} could not take a fork: {source}")]
    Fork {
        id: PhilosopherId,
        #[source]
        source: ForkError,
    },
}
