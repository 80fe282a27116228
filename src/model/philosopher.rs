use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a philosopher as read from the roster.
///
/// The id decides tie-break parity. Ring adjacency is decided by the
/// philosopher's position in the roster, never by the id.
pub type PhilosopherId = i64;

/// Timing parameters for one philosopher, in whole time-units.
///
/// # Notes
/// A time-unit is one second by default. See
/// [`SimulationConfig::time_unit`](crate::config::SimulationConfig::time_unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosopherParams {
    pub id: PhilosopherId,
    pub arrival_delay: u64,
    pub hold_duration: u64,
}

impl PhilosopherParams {
    pub fn new(id: PhilosopherId, arrival_delay: u64, hold_duration: u64) -> Self {
        Self {
            id,
            arrival_delay,
            hold_duration,
        }
    }
}

/// Where a philosopher is in its single think/eat cycle.
///
/// The cycle is a single pass: no transition re-enters an earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhilosopherState {
    Created,
    WaitingArrival,
    Thinking,
    WaitingResources,
    Consuming,
    Released,
    Terminated,
    Interrupted,
}

impl PhilosopherState {
    /// `true` once the philosopher can make no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Terminated | Self::Interrupted)
    }
}

impl fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::WaitingArrival => "waiting_arrival",
            Self::Thinking => "thinking",
            Self::WaitingResources => "waiting_resources",
            Self::Consuming => "consuming",
            Self::Released => "released",
            Self::Terminated => "terminated",
            Self::Interrupted => "interrupted",
        };
        f.write_str(name)
    }
}

/// Which of its two forks a philosopher is reaching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Acquisition order for a philosopher with the given id.
    ///
    /// Even ids take the left fork first, odd ids the right fork first.
    /// Two neighbours therefore never approach their shared fork in the same
    /// relative order around the whole ring, which rules out circular wait.
    pub fn acquisition_order(id: PhilosopherId) -> [Side; 2] {
        if id.rem_euclid(2) == 0 {
            [Side::Left, Side::Right]
        } else {
            [Side::Right, Side::Left]
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// How a philosopher's task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ate once and released both forks.
    Completed,
    /// Cancelled while in `state`. Any fork it held has been released.
    Interrupted { state: PhilosopherState },
}

impl Outcome {
    pub fn final_state(&self) -> PhilosopherState {
        match self {
            Outcome::Completed => PhilosopherState::Terminated,
            Outcome::Interrupted { .. } => PhilosopherState::Interrupted,
        }
    }
}
