use dining_philosophers::config::SimulationConfig;
use dining_philosophers::framework::RecordingSink;
use dining_philosophers::lifecycle::DiningTable;
use dining_philosophers::model::{EventKind, LifecycleEvent, Outcome, PhilosopherParams};
use dining_philosophers::roster::parse_roster;
use std::time::Duration;

const TEST_TIMEOUT: Duration = Duration::from_secs(20);

fn fast_config() -> SimulationConfig {
    SimulationConfig {
        time_unit_ms: 5,
        think_max_units: 2,
    }
}

fn roster(size: i64, hold: u64) -> Vec<PhilosopherParams> {
    (0..size).map(|id| PhilosopherParams::new(id, 0, hold)).collect()
}

/// Full end-to-end run: five philosophers, same arrival, one unit of eating each.
#[tokio::test]
async fn test_five_philosophers_scenario() {
    let sink = RecordingSink::shared();
    let table = DiningTable::launch(roster(5, 1), fast_config(), sink.clone()).unwrap();
    let forks = table.forks().clone();

    let outcomes = tokio::time::timeout(TEST_TIMEOUT, table.join())
        .await
        .expect("table deadlocked")
        .expect("a philosopher failed");

    assert_eq!(outcomes, vec![Outcome::Completed; 5]);
    assert_eq!(sink.count(EventKind::Arrived), 5);
    assert_eq!(sink.count(EventKind::Consuming), 5);
    assert_eq!(sink.count(EventKind::Released), 5);
    assert_eq!(sink.count(EventKind::Terminated), 5);
    assert_eq!(sink.count(EventKind::Interrupted), 0);

    // Each fork is shared by exactly two philosophers who each ate once
    for fork in forks.iter() {
        assert_eq!(fork.acquisitions(), 2, "fork {}", fork.index());
        assert_eq!(fork.peak_holders(), 1, "fork {}", fork.index());
        assert!(!fork.is_held());
    }
}

/// No deadlock for a range of table sizes, all arriving together.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_deadlock_freedom_for_various_sizes() {
    for size in [2, 3, 5, 8] {
        let sink = RecordingSink::shared();
        let table = DiningTable::launch(roster(size, 1), fast_config(), sink.clone()).unwrap();
        let forks = table.forks().clone();

        let outcomes = tokio::time::timeout(TEST_TIMEOUT, table.join())
            .await
            .unwrap_or_else(|_| panic!("table of {size} deadlocked"))
            .unwrap();

        assert!(outcomes.iter().all(|o| *o == Outcome::Completed));
        assert_eq!(sink.count(EventKind::Terminated), size as usize);
        assert!(forks.all_free(), "table of {size} leaked a fork");
        assert!(forks.iter().all(|fork| fork.peak_holders() <= 1));
    }
}

/// Two philosophers share both forks between them.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_two_seat_table_terminates() {
    let sink = RecordingSink::shared();
    let table = DiningTable::launch(roster(2, 2), fast_config(), sink.clone()).unwrap();
    let forks = table.forks().clone();

    tokio::time::timeout(TEST_TIMEOUT, table.join())
        .await
        .expect("two-seat table deadlocked")
        .unwrap();

    assert!(forks.all_free());
    assert!(forks.iter().all(|fork| fork.acquisitions() == 2));
}

/// A lone philosopher has one fork as both left and right.
#[tokio::test]
async fn test_single_seat_table_terminates() {
    let table = DiningTable::launch(roster(1, 1), fast_config(), RecordingSink::shared()).unwrap();
    let forks = table.forks().clone();

    let outcomes = tokio::time::timeout(TEST_TIMEOUT, table.join())
        .await
        .expect("lone philosopher deadlocked")
        .unwrap();

    assert_eq!(outcomes, vec![Outcome::Completed]);
    assert_eq!(forks.get(0).unwrap().acquisitions(), 1);
}

/// Every philosopher goes through waiting and eating exactly once, in order.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_each_philosopher_eats_once_in_order() {
    let sink = RecordingSink::shared();
    let table = DiningTable::launch(roster(6, 0), fast_config(), sink.clone()).unwrap();
    tokio::time::timeout(TEST_TIMEOUT, table.join())
        .await
        .expect("table deadlocked")
        .unwrap();

    for id in 0..6 {
        let kinds: Vec<EventKind> = sink.events_for(id).iter().map(LifecycleEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Arrived,
                EventKind::Thinking,
                EventKind::WaitingForForks,
                EventKind::PickedUp,
                EventKind::PickedUp,
                EventKind::Consuming,
                EventKind::Released,
                EventKind::Terminated,
            ],
            "philosopher {id}"
        );
    }
}

/// Heavy contention: long meals, zero think time, larger table.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mutual_exclusion_under_contention() {
    let config = SimulationConfig {
        time_unit_ms: 3,
        think_max_units: 0,
    };
    let table = DiningTable::launch(roster(8, 3), config, RecordingSink::shared()).unwrap();
    let forks = table.forks().clone();

    tokio::time::timeout(TEST_TIMEOUT, table.join())
        .await
        .expect("table deadlocked")
        .unwrap();

    for fork in forks.iter() {
        assert_eq!(fork.peak_holders(), 1);
        assert_eq!(fork.acquisitions(), 2);
    }
}

/// Roster text straight into a table, staggered arrivals included.
#[tokio::test]
async fn test_roster_to_table() {
    let text = "PID Arrival Burst\n0 0 2\n1 1 1\n2 0 3\n3 2 1\n";
    let params = parse_roster(text).unwrap();
    let sink = RecordingSink::shared();
    let table = DiningTable::launch(params, fast_config(), sink.clone()).unwrap();
    assert_eq!(table.ids(), &[0, 1, 2, 3]);

    tokio::time::timeout(TEST_TIMEOUT, table.join())
        .await
        .expect("table deadlocked")
        .unwrap();
    assert_eq!(sink.count(EventKind::Released), 4);
}
