//! # Philosopher
//!
//! The actor that runs one think/eat cycle:
//!
//! ```text
//! Created -> WaitingArrival -> Thinking -> WaitingResources -> Consuming -> Released -> Terminated
//!                 \________________\______________\________________\
//!                                                                   -> Interrupted
//! ```
//!
//! Forks are taken in the order given by [`Side::acquisition_order`]: even ids
//! left first, odd ids right first. Every suspension point is raced against the
//! cancellation token; whichever way the cycle ends, every fork still held is
//! released before the final event is reported.

pub mod error;

pub use error::*;

use crate::config::SimulationConfig;
use crate::fork::{Fork, ForkError, ForkGuard};
use crate::framework::{Actor, EventSink};
use crate::model::{LifecycleEvent, Outcome, PhilosopherId, PhilosopherParams, PhilosopherState, Side};
use async_trait::async_trait;
use rand::Rng;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Why a cycle stopped before `Released`.
enum Halt {
    Interrupted,
    Fork(ForkError),
}

impl From<ForkError> for Halt {
    fn from(e: ForkError) -> Self {
        Halt::Fork(e)
    }
}

/// One diner at the table.
///
/// Holds shared handles to its two forks; the forks belong to the ring.
pub struct Philosopher {
    params: PhilosopherParams,
    left: Arc<Fork>,
    right: Arc<Fork>,
    config: SimulationConfig,
    sink: Arc<dyn EventSink>,
    state: PhilosopherState,
}

impl Philosopher {
    pub fn new(
        params: PhilosopherParams,
        left: Arc<Fork>,
        right: Arc<Fork>,
        config: SimulationConfig,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            params,
            left,
            right,
            config,
            sink,
            state: PhilosopherState::Created,
        }
    }

    pub fn id(&self) -> PhilosopherId {
        self.params.id
    }

    pub fn state(&self) -> PhilosopherState {
        self.state
    }

    fn fork(&self, side: Side) -> &Arc<Fork> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn enter(&mut self, next: PhilosopherState) {
        debug!(philosopher = self.id(), from = %self.state, to = %next, "Transition");
        self.state = next;
    }

    fn emit(&self, event: LifecycleEvent) {
        self.sink.record(self.id(), &event);
    }

    /// Uniform in `[0, think_max)`, unseeded.
    fn think_time(&self) -> Duration {
        let max = self.config.think_max();
        if max.is_zero() {
            return Duration::ZERO;
        }
        let micros = rand::thread_rng().gen_range(0..max.as_micros() as u64);
        Duration::from_micros(micros)
    }

    async fn interruptible<F: Future>(
        cancel: &CancellationToken,
        future: F,
    ) -> Result<F::Output, Halt> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Halt::Interrupted),
            output = future => Ok(output),
        }
    }

    /// Everything from `WaitingArrival` to `Released`. Acquired forks are
    /// pushed into `held` so the caller can release them however this ends.
    async fn cycle(
        &mut self,
        cancel: &CancellationToken,
        held: &mut Vec<ForkGuard>,
    ) -> Result<(), Halt> {
        self.enter(PhilosopherState::WaitingArrival);
        let arrival = self.config.units(self.params.arrival_delay);
        Self::interruptible(cancel, tokio::time::sleep(arrival)).await?;
        self.emit(LifecycleEvent::Arrived);

        self.enter(PhilosopherState::Thinking);
        let duration = self.think_time();
        self.emit(LifecycleEvent::Thinking { duration });
        Self::interruptible(cancel, tokio::time::sleep(duration)).await?;

        self.enter(PhilosopherState::WaitingResources);
        self.emit(LifecycleEvent::WaitingForForks);
        for side in Side::acquisition_order(self.id()) {
            let fork = Arc::clone(self.fork(side));
            // In a one-seat ring both sides are the same fork
            if !held.iter().any(|guard| Arc::ptr_eq(guard.fork(), &fork)) {
                let guard = Self::interruptible(cancel, fork.acquire()).await??;
                held.push(guard);
            }
            self.emit(LifecycleEvent::PickedUp(side));
        }

        self.enter(PhilosopherState::Consuming);
        let duration = self.config.units(self.params.hold_duration);
        self.emit(LifecycleEvent::Consuming { duration });
        Self::interruptible(cancel, tokio::time::sleep(duration)).await?;

        held.clear();
        self.enter(PhilosopherState::Released);
        self.emit(LifecycleEvent::Released);
        Ok(())
    }
}

#[async_trait]
impl Actor for Philosopher {
    type Output = Result<Outcome, PhilosopherError>;

    fn name(&self) -> String {
        format!("philosopher-{}", self.id())
    }

    async fn run(mut self, cancel: CancellationToken) -> Self::Output {
        let mut held = Vec::with_capacity(2);
        let result = self.cycle(&cancel, &mut held).await;
        let stopped_in = self.state;
        // Forks go back before anyone hears how this ended
        held.clear();

        match result {
            Ok(()) => {
                self.enter(PhilosopherState::Terminated);
                self.emit(LifecycleEvent::Terminated);
                Ok(Outcome::Completed)
            }
            Err(Halt::Interrupted) => {
                self.enter(PhilosopherState::Interrupted);
                self.emit(LifecycleEvent::Interrupted { state: stopped_in });
                Ok(Outcome::Interrupted { state: stopped_in })
            }
            Err(Halt::Fork(source)) => {
                warn!(philosopher = self.id(), state = %stopped_in, error = %source, "Fork unavailable");
                self.enter(PhilosopherState::Interrupted);
                self.emit(LifecycleEvent::Interrupted { state: stopped_in });
                Err(PhilosopherError::Fork {
                    id: self.id(),
                    source,
                })
            }
        }
    }
}
