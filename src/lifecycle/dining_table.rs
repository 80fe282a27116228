use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::fork::ForkRing;
use crate::framework::{self, ActorHandle, EventSink};
use crate::model::{Outcome, PhilosopherId, PhilosopherParams};
use crate::philosopher::{Philosopher, PhilosopherError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

type PhilosopherHandle = ActorHandle<Result<Outcome, PhilosopherError>>;

/// The orchestrator: a fork ring plus one running philosopher per seat.
///
/// `DiningTable` is responsible for:
/// - **Seating**: the philosopher at position `i` gets forks `i` and `(i + 1) % N`
/// - **Launching**: every philosopher runs on its own Tokio task
/// - **Interruption**: each seat has a child of one table-wide cancellation token
///
/// Position in the roster decides adjacency. Ids only decide tie-break parity,
/// so duplicate ids are seated like any other.
///
/// # Example
///
/// ```ignore
/// let roster = load_roster("processes.txt")?;
/// let table = DiningTable::launch(roster, SimulationConfig::default(), Arc::new(TracingSink))?;
///
/// // launch() has already returned; philosophers run on their own.
/// // Optionally wait for all of them:
/// let outcomes = table.join().await?;
/// ```
pub struct DiningTable {
    forks: ForkRing,
    ids: Vec<PhilosopherId>,
    cancel: CancellationToken,
    handles: Vec<PhilosopherHandle>,
}

impl DiningTable {
    /// Builds the ring, seats and launches every philosopher, then returns
    /// without waiting for any of them.
    ///
    /// # Errors
    ///
    /// [`SimulationError::EmptyTable`] if `roster` is empty. Nothing is
    /// spawned in that case.
    pub fn launch(
        roster: Vec<PhilosopherParams>,
        config: SimulationConfig,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, SimulationError> {
        if roster.is_empty() {
            return Err(SimulationError::EmptyTable);
        }

        let seats = roster.len();
        let forks = ForkRing::new(seats);
        let cancel = CancellationToken::new();
        let ids = roster.iter().map(|params| params.id).collect();

        // Every philosopher is constructed before any is started
        let philosophers: Vec<Philosopher> = roster
            .into_iter()
            .enumerate()
            .map(|(position, params)| {
                Philosopher::new(
                    params,
                    forks.left_of(position),
                    forks.right_of(position),
                    config,
                    Arc::clone(&sink),
                )
            })
            .collect();

        let handles = philosophers
            .into_iter()
            .map(|philosopher| framework::spawn(philosopher, cancel.child_token()))
            .collect();

        info!(seats, time_unit = ?config.time_unit(), "Table launched");

        Ok(Self {
            forks,
            ids,
            cancel,
            handles,
        })
    }

    pub fn forks(&self) -> &ForkRing {
        &self.forks
    }

    /// Number of seats (and forks).
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Philosopher ids in seating order.
    pub fn ids(&self) -> &[PhilosopherId] {
        &self.ids
    }

    /// Interrupts the philosopher at `position`.
    ///
    /// Returns `false` if there is no such seat.
    pub fn interrupt(&self, position: usize) -> bool {
        match self.handles.get(position) {
            Some(handle) => {
                handle.interrupt();
                true
            }
            None => {
                warn!(position, seats = self.len(), "No philosopher at position");
                false
            }
        }
    }

    /// Interrupts every philosopher still running.
    pub fn interrupt_all(&self) {
        info!(seats = self.len(), "Interrupting all philosophers");
        self.cancel.cancel();
    }

    /// A token that interrupts the whole table when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// `true` once every philosopher task has ended.
    pub fn is_finished(&self) -> bool {
        self.handles.iter().all(ActorHandle::is_finished)
    }

    /// Waits for every philosopher and returns their outcomes in seating order.
    ///
    /// Launching never depends on this; it exists for callers that want to
    /// observe the run (tests, or a binary that must outlive its tasks).
    ///
    /// # Returns
    ///
    /// - `Ok(outcomes)` if every task ended normally, interrupted or not
    /// - `Err(SimulationError)` for the first task that panicked, was aborted
    ///   or failed to take a fork. The remaining tasks are still awaited.
    pub async fn join(self) -> Result<Vec<Outcome>, SimulationError> {
        let mut outcomes = Vec::with_capacity(self.handles.len());
        let mut first_error = None;

        for handle in self.handles {
            let name = handle.name().to_string();
            match handle.join().await {
                Ok(Ok(outcome)) => outcomes.push(outcome),
                Ok(Err(e)) => {
                    error!(philosopher = %name, error = %e, "Philosopher failed");
                    first_error = first_error.or(Some(SimulationError::Philosopher(e)));
                }
                Err(e) => {
                    error!(philosopher = %name, error = %e, "Philosopher task failed");
                    first_error = first_error.or(Some(SimulationError::Join(e)));
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }
        info!(
            seats = outcomes.len(),
            all_forks_free = self.forks.all_free(),
            "Table cleared"
        );
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{RecordingSink, TracingSink};
    use crate::model::PhilosopherState;
    use std::time::Duration;

    fn quick() -> SimulationConfig {
        SimulationConfig {
            time_unit_ms: 2,
            think_max_units: 2,
        }
    }

    #[tokio::test]
    async fn test_empty_roster_is_rejected() {
        let result = DiningTable::launch(vec![], quick(), Arc::new(TracingSink));
        assert!(matches!(result, Err(SimulationError::EmptyTable)));
    }

    #[tokio::test]
    async fn test_launch_returns_before_philosophers_finish() {
        let roster = vec![PhilosopherParams::new(0, 10_000, 1), PhilosopherParams::new(1, 10_000, 1)];
        let table = DiningTable::launch(roster, quick(), RecordingSink::shared()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.ids(), &[0, 1]);
        assert!(!table.is_finished());

        table.interrupt_all();
        let outcomes = table.join().await.unwrap();
        assert!(outcomes
            .iter()
            .all(|o| *o == Outcome::Interrupted { state: PhilosopherState::WaitingArrival }));
    }

    #[tokio::test]
    async fn test_interrupt_unknown_position() {
        let table = DiningTable::launch(
            vec![PhilosopherParams::new(0, 0, 0)],
            quick(),
            RecordingSink::shared(),
        )
        .unwrap();
        assert!(!table.interrupt(5));
        tokio::time::timeout(Duration::from_secs(5), table.join())
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_ids_seated_by_position() {
        let roster = vec![
            PhilosopherParams::new(4, 0, 1),
            PhilosopherParams::new(4, 0, 1),
            PhilosopherParams::new(4, 0, 1),
        ];
        let sink = RecordingSink::shared();
        let table = DiningTable::launch(roster, quick(), sink.clone()).unwrap();
        let forks = table.forks().clone();

        let outcomes = tokio::time::timeout(Duration::from_secs(10), table.join())
            .await
            .expect("duplicate ids deadlocked")
            .unwrap();
        assert_eq!(outcomes, vec![Outcome::Completed; 3]);
        assert!(forks.all_free());
        assert!(forks.iter().all(|fork| fork.acquisitions() == 2));
    }
}
