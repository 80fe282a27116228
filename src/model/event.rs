//! Lifecycle events reported by philosophers.

use super::{PhilosopherState, Side};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A step of the philosopher cycle, reported to an
/// [`EventSink`](crate::framework::EventSink) as it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Arrived,
    Thinking { duration: Duration },
    WaitingForForks,
    PickedUp(Side),
    Consuming { duration: Duration },
    Released,
    Terminated,
    /// Cancelled while in `state`. Emitted after every held fork is free.
    Interrupted { state: PhilosopherState },
}

/// Payload-free discriminant of [`LifecycleEvent`], handy for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrived,
    Thinking,
    WaitingForForks,
    PickedUp,
    Consuming,
    Released,
    Terminated,
    Interrupted,
}

impl LifecycleEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            LifecycleEvent::Arrived => EventKind::Arrived,
            LifecycleEvent::Thinking { .. } => EventKind::Thinking,
            LifecycleEvent::WaitingForForks => EventKind::WaitingForForks,
            LifecycleEvent::PickedUp(_) => EventKind::PickedUp,
            LifecycleEvent::Consuming { .. } => EventKind::Consuming,
            LifecycleEvent::Released => EventKind::Released,
            LifecycleEvent::Terminated => EventKind::Terminated,
            LifecycleEvent::Interrupted { .. } => EventKind::Interrupted,
        }
    }

    /// Short lowercase label used as the `event` field in logs.
    pub fn label(&self) -> &'static str {
        match self.kind() {
            EventKind::Arrived => "arrived",
            EventKind::Thinking => "thinking",
            EventKind::WaitingForForks => "waiting_for_forks",
            EventKind::PickedUp => "picked_up",
            EventKind::Consuming => "consuming",
            EventKind::Released => "released",
            EventKind::Terminated => "terminated",
            EventKind::Interrupted => "interrupted",
        }
    }
}
