//! # Recording Sink
//!
//! An [`EventSink`] that keeps every event in memory, for tests.
//!
//! ```ignore
//! let recorder = Arc::new(RecordingSink::new());
//! let table = DiningTable::launch(roster, config, recorder.clone())?;
//! table.join().await?;
//! assert_eq!(recorder.count(EventKind::Consuming), 5);
//! ```

use crate::framework::EventSink;
use crate::model::{EventKind, LifecycleEvent, PhilosopherId};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

/// Thread-safe, append-only log of `(philosopher, event)` pairs in the order
/// they were recorded.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(PhilosopherId, LifecycleEvent)>>,
    changed: Notify,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the common `Arc<RecordingSink>` case.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(PhilosopherId, LifecycleEvent)>> {
        // A panicking philosopher must not hide the events recorded before it.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<(PhilosopherId, LifecycleEvent)> {
        self.lock().clone()
    }

    /// Events of one philosopher, in order.
    pub fn events_for(&self, id: PhilosopherId) -> Vec<LifecycleEvent> {
        self.lock()
            .iter()
            .filter(|(who, _)| *who == id)
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.lock().iter().filter(|(_, e)| e.kind() == kind).count()
    }

    pub fn count_for(&self, id: PhilosopherId, kind: EventKind) -> usize {
        self.lock()
            .iter()
            .filter(|(who, e)| *who == id && e.kind() == kind)
            .count()
    }

    /// Waits until `event` has been recorded for `id`.
    pub async fn wait_for(&self, id: PhilosopherId, event: &LifecycleEvent) {
        loop {
            let notified = self.changed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.lock().iter().any(|(who, e)| *who == id && e == event) {
                return;
            }
            notified.await;
        }
    }
}

impl EventSink for RecordingSink {
    fn record(&self, id: PhilosopherId, event: &LifecycleEvent) {
        self.lock().push((id, event.clone()));
        self.changed.notify_waiters();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Side;
    use std::time::Duration;

    #[test]
    fn test_counts_and_filters() {
        let sink = RecordingSink::new();
        sink.record(0, &LifecycleEvent::Arrived);
        sink.record(1, &LifecycleEvent::Arrived);
        sink.record(0, &LifecycleEvent::PickedUp(Side::Left));

        assert_eq!(sink.count(EventKind::Arrived), 2);
        assert_eq!(sink.count_for(0, EventKind::PickedUp), 1);
        assert_eq!(
            sink.events_for(0),
            vec![LifecycleEvent::Arrived, LifecycleEvent::PickedUp(Side::Left)]
        );
        assert_eq!(sink.events().len(), 3);
    }

    #[tokio::test]
    async fn test_wait_for_sees_later_event() {
        let sink = RecordingSink::shared();
        let writer = Arc::clone(&sink);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            writer.record(4, &LifecycleEvent::Released);
        });

        tokio::time::timeout(
            Duration::from_secs(5),
            sink.wait_for(4, &LifecycleEvent::Released),
        )
        .await
        .expect("event never observed");
    }
}
