//! The fixed ring of forks shared by all philosophers.

use super::Fork;
use std::sync::Arc;

/// N forks in a circle. Fork `i` sits between philosopher `i` and
/// philosopher `(i + 1) % N`.
///
/// The ring is created once, sized to the roster and never resized.
/// Every philosopher holds `Arc` clones of its two forks, so the forks
/// outlive any single philosopher.
#[derive(Debug, Clone)]
pub struct ForkRing {
    forks: Vec<Arc<Fork>>,
}

impl ForkRing {
    pub fn new(size: usize) -> Self {
        Self {
            forks: (0..size).map(|index| Arc::new(Fork::new(index))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.forks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Fork>> {
        self.forks.get(index)
    }

    /// Left fork of the philosopher at `position`.
    ///
    /// # Panics
    /// Panics if `position` is outside the ring.
    pub fn left_of(&self, position: usize) -> Arc<Fork> {
        Arc::clone(&self.forks[position])
    }

    /// Right fork of the philosopher at `position`: fork `(position + 1) % N`.
    ///
    /// # Panics
    /// Panics if `position` is outside the ring.
    pub fn right_of(&self, position: usize) -> Arc<Fork> {
        assert!(position < self.len(), "position {position} outside ring");
        Arc::clone(&self.forks[(position + 1) % self.len()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Fork>> {
        self.forks.iter()
    }

    /// `true` when no fork in the ring is held.
    pub fn all_free(&self) -> bool {
        self.forks.iter().all(|fork| !fork.is_held())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_share_a_fork() {
        let ring = ForkRing::new(5);
        for position in 0..5 {
            let right = ring.right_of(position);
            let neighbour_left = ring.left_of((position + 1) % 5);
            assert!(Arc::ptr_eq(&right, &neighbour_left));
        }
    }

    #[test]
    fn test_last_position_wraps_to_first_fork() {
        let ring = ForkRing::new(3);
        assert_eq!(ring.right_of(2).index(), 0);
        assert_eq!(ring.left_of(2).index(), 2);
    }

    #[test]
    fn test_single_fork_ring() {
        let ring = ForkRing::new(1);
        assert!(Arc::ptr_eq(&ring.left_of(0), &ring.right_of(0)));
    }

    #[test]
    fn test_new_ring_is_free() {
        let ring = ForkRing::new(4);
        assert_eq!(ring.len(), 4);
        assert!(ring.all_free());
        assert!(ring.iter().all(|fork| fork.acquisitions() == 0));
    }
}
