//! Error types for roster loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the philosopher roster.
///
/// All of them are fatal for the run: they are reported before any
/// philosopher is started.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be opened or read.
    #[error("Error reading roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field is present but is not a valid integer for its column.
    #[error("Line {line}: invalid {field} {value:?}")]
    Malformed {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A data line has fewer than three fields.
    #[error("Line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    /// The roster contains no philosopher at all.
    #[error("Roster has no philosophers")]
    Empty,
}
