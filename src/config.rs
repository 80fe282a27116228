//! Simulation timing configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a [`SimulationConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How long a time-unit lasts and how long philosophers may think.
///
/// Loaded from JSON at runtime; every field is optional:
///
/// ```json
/// { "time_unit_ms": 1000, "think_max_units": 2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Length of one roster time-unit, in milliseconds.
    pub time_unit_ms: u64,

    /// Thinking lasts a uniformly random time in `[0, think_max_units)`
    /// time-units. Zero disables thinking.
    pub think_max_units: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: 1000,
            think_max_units: 2,
        }
    }
}

impl SimulationConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    /// `units` time-units as a wall-clock duration.
    pub fn units(&self, units: u64) -> Duration {
        Duration::from_millis(self.time_unit_ms.saturating_mul(units))
    }

    /// Upper bound (exclusive) of a thinking interval.
    pub fn think_max(&self) -> Duration {
        self.units(self.think_max_units)
    }
}
