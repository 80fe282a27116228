//! # Core Actor Framework
//!
//! ## Key Types
//!
//! - [`Actor`]: The trait every independently running unit implements.
//! - [`ActorHandle`]: The caller's half: interrupt and join.
//! - [`EventSink`]: The contract for reporting lifecycle events.
//! - [`FrameworkError`]: Common errors (e.g., the actor task panicked).

use crate::model::{LifecycleEvent, PhilosopherId};
use async_trait::async_trait;
use std::fmt::Debug;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A unit of execution that runs once, on its own task, until it finishes or
/// is interrupted.
///
/// # Architecture Note
/// There is exactly one entry point, `run`. It takes the actor by value, so
/// an actor cannot be run twice, and it receives the cancellation token that
/// stands for "someone interrupted you". Implementations are expected to race
/// that token against every suspension point and to clean up whatever they
/// hold before returning.
#[async_trait]
pub trait Actor: Send + 'static {
    /// What the actor reports when its task ends.
    type Output: Send + Debug + 'static;

    /// Short name used in logs.
    fn name(&self) -> String;

    async fn run(self, cancel: CancellationToken) -> Self::Output;
}

// =============================================================================
// 2. ERRORS
// =============================================================================

/// Errors that can occur within the actor plumbing itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor {name} panicked: {reason}")]
    Panicked { name: String, reason: String },
    #[error("Actor {0} was aborted")]
    Aborted(String),
}

// =============================================================================
// 3. LAUNCHING
// =============================================================================

/// Runs `actor` on a new Tokio task and returns immediately.
///
/// The task is detached: nothing waits for it unless the caller joins the
/// returned handle. `cancel` is usually a child of some wider token so that a
/// whole group can be interrupted at once.
pub fn spawn<A: Actor>(actor: A, cancel: CancellationToken) -> ActorHandle<A::Output> {
    let name = actor.name();
    debug!(actor = %name, "Spawning");
    let task = tokio::spawn(actor.run(cancel.clone()));
    ActorHandle { name, cancel, task }
}

/// The caller's side of a spawned [`Actor`].
#[derive(Debug)]
pub struct ActorHandle<O> {
    name: String,
    cancel: CancellationToken,
    task: JoinHandle<O>,
}

impl<O> ActorHandle<O> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delivers the interruption signal. The actor decides how promptly it
    /// reacts; well-behaved actors react at their next suspension point.
    pub fn interrupt(&self) {
        info!(actor = %self.name, "Interrupt requested");
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the actor's task to end.
    ///
    /// # Returns
    ///
    /// - `Ok(output)` with whatever `run` returned
    /// - `Err(FrameworkError)` if the task panicked or was aborted
    pub async fn join(self) -> Result<O, FrameworkError> {
        match self.task.await {
            Ok(output) => Ok(output),
            Err(e) if e.is_panic() => {
                warn!(actor = %self.name, error = %e, "Actor task panicked");
                Err(FrameworkError::Panicked {
                    name: self.name,
                    reason: e.to_string(),
                })
            }
            Err(e) => {
                warn!(actor = %self.name, error = %e, "Actor task aborted");
                Err(FrameworkError::Aborted(self.name))
            }
        }
    }

    /// Drops the task at its current suspension point without letting it run
    /// its own cleanup. Values it owns are still dropped.
    pub fn abort(&self) {
        self.task.abort();
    }
}

// =============================================================================
// 4. EVENT SINKS
// =============================================================================

/// Where philosophers report their lifecycle.
///
/// Called from many tasks at once, so implementations must be cheap and
/// must not block for long.
pub trait EventSink: Send + Sync + 'static {
    fn record(&self, id: PhilosopherId, event: &LifecycleEvent);
}

/// Default sink: one structured `tracing` event per lifecycle event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, id: PhilosopherId, event: &LifecycleEvent) {
        let label = event.label();
        match event {
            LifecycleEvent::Arrived => info!(philosopher = id, event = label, "Arrived"),
            LifecycleEvent::Thinking { duration } => {
                info!(philosopher = id, event = label, ?duration, "Thinking")
            }
            LifecycleEvent::WaitingForForks => {
                info!(philosopher = id, event = label, "Waiting for forks")
            }
            LifecycleEvent::PickedUp(side) => {
                info!(philosopher = id, event = label, %side, "Picked up fork")
            }
            LifecycleEvent::Consuming { duration } => {
                info!(philosopher = id, event = label, ?duration, "Eating")
            }
            LifecycleEvent::Released => info!(philosopher = id, event = label, "Released forks"),
            LifecycleEvent::Terminated => debug!(philosopher = id, event = label, "Done"),
            LifecycleEvent::Interrupted { state } => {
                warn!(philosopher = id, event = label, %state, "Interrupted")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Sleeper {
        nap: Duration,
    }

    #[async_trait]
    impl Actor for Sleeper {
        type Output = bool;

        fn name(&self) -> String {
            "sleeper".to_string()
        }

        async fn run(self, cancel: CancellationToken) -> bool {
            tokio::select! {
                _ = cancel.cancelled() => false,
                _ = tokio::time::sleep(self.nap) => true,
            }
        }
    }

    struct Panicker;

    #[async_trait]
    impl Actor for Panicker {
        type Output = ();

        fn name(&self) -> String {
            "panicker".to_string()
        }

        async fn run(self, _cancel: CancellationToken) {
            panic!("boom");
        }
    }

    #[tokio::test]
    async fn test_spawn_and_join() {
        let handle = spawn(Sleeper { nap: Duration::from_millis(5) }, CancellationToken::new());
        assert_eq!(handle.name(), "sleeper");
        assert_eq!(handle.join().await, Ok(true));
    }

    #[tokio::test]
    async fn test_interrupt_reaches_actor() {
        let handle = spawn(Sleeper { nap: Duration::from_secs(60) }, CancellationToken::new());
        handle.interrupt();
        let finished = tokio::time::timeout(Duration::from_secs(5), handle.join())
            .await
            .expect("interrupted actor did not stop");
        assert_eq!(finished, Ok(false));
    }

    #[tokio::test]
    async fn test_parent_token_interrupts_children() {
        let parent = CancellationToken::new();
        let first = spawn(Sleeper { nap: Duration::from_secs(60) }, parent.child_token());
        let second = spawn(Sleeper { nap: Duration::from_secs(60) }, parent.child_token());
        parent.cancel();
        assert_eq!(first.join().await, Ok(false));
        assert_eq!(second.join().await, Ok(false));
    }

    #[tokio::test]
    async fn test_panic_is_reported() {
        let handle = spawn(Panicker, CancellationToken::new());
        let result = handle.join().await;
        assert!(matches!(result, Err(FrameworkError::Panicked { .. })));
    }

    #[tokio::test]
    async fn test_abort_is_reported() {
        let handle = spawn(Sleeper { nap: Duration::from_secs(60) }, CancellationToken::new());
        handle.abort();
        assert_eq!(
            handle.join().await,
            Err(FrameworkError::Aborted("sleeper".to_string()))
        );
    }
}
