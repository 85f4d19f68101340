//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! Evicts the way that was filled longest ago, regardless of how recently it hit.
//! Each set keeps an insertion queue; an eviction pops the oldest way and re-appends
//! it as the newest, because its refill makes it the youngest line in the set.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_insert()`: O(1)
//!   - `evict()`: O(1)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Worst Case:** Workloads with strong temporal locality (hot lines age out)

use std::collections::VecDeque;

use super::ReplacementPolicy;

/// FIFO Policy state.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    /// One insertion queue per set. Front is oldest.
    queues: Vec<VecDeque<usize>>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance with every set empty.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            queues: vec![VecDeque::with_capacity(ways); sets],
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// Hits do not change insertion order.
    fn record_hit(&mut self, _set: usize, _way: usize) {}

    fn record_insert(&mut self, set: usize, way: usize) {
        debug_assert!(!self.queues[set].contains(&way), "way {way} filled twice");
        self.queues[set].push_back(way);
    }

    fn evict(&mut self, set: usize) -> usize {
        let queue = &mut self.queues[set];
        // Only called on full sets, so the queue holds every way.
        let victim = queue.pop_front().unwrap_or_default();
        queue.push_back(victim);
        victim
    }

    fn order(&self, set: usize) -> Option<Vec<usize>> {
        Some(self.queues[set].iter().copied().collect())
    }
}
