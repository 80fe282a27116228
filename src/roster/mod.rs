//! # Roster
//!
//! Reads philosopher parameters from the line-oriented table the simulation
//! is driven by:
//!
//! ```text
//! PID Arrival Burst
//! 0   0       3
//! 1   1       2
//! ```
//!
//! Each data line holds `id arrival_delay hold_duration` as whitespace
//! separated integers, durations in whole time-units. A line whose first
//! token starts with `PID` is a header and is skipped, as are blank lines and
//! `#` comments. Anything after the third field is ignored.

pub mod error;

pub use error::*;

use crate::model::{PhilosopherId, PhilosopherParams};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

const HEADER_MARKER: &str = "PID";

/// Parses a whole roster. Order of the result is order of the lines, which is
/// also the order of the philosophers around the table.
pub fn parse_roster(text: &str) -> Result<Vec<PhilosopherParams>, RosterError> {
    let mut roster = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(HEADER_MARKER) {
            debug!(line, "Skipping line");
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let id: PhilosopherId = field(&mut fields, line, "id")?;
        let arrival_delay: u64 = field(&mut fields, line, "arrival_delay")?;
        let hold_duration: u64 = field(&mut fields, line, "hold_duration")?;

        roster.push(PhilosopherParams::new(id, arrival_delay, hold_duration));
    }

    if roster.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(roster)
}

/// Reads and parses the roster file at `path`.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<PhilosopherParams>, RosterError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&text)?;
    info!(path = %path.display(), philosophers = roster.len(), "Roster loaded");
    Ok(roster)
}

fn field<'a, T: FromStr>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    name: &'static str,
) -> Result<T, RosterError> {
    let value = fields
        .next()
        .ok_or(RosterError::MissingField { line, field: name })?;
    value.parse().map_err(|_| RosterError::Malformed {
        line,
        field: name,
        value: value.to_string(),
    })
}
