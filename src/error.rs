//! Top-level error type for a simulation run.

use crate::config::ConfigError;
use crate::framework::FrameworkError;
use crate::philosopher::PhilosopherError;
use crate::roster::RosterError;
use thiserror::Error;

/// Errors that can stop a simulation from starting or from being joined.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A table needs at least one philosopher.
    #[error("Cannot seat an empty table")]
    EmptyTable,

    /// A philosopher could not finish its cycle.
    #[error(transparent)]
    Philosopher(#[from] PhilosopherError),

    /// A philosopher task panicked or was aborted.
    #[error("Philosopher task failed: {0}")]
    Join(#[from] FrameworkError),
}
