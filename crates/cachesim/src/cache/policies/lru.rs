//! Least Recently Used (LRU) Replacement Policy.
//!
//! Keeps a recency queue per set: the front is the least recently used way, the back
//! the most recently used. A hit moves its way to the back. An eviction pops the front
//! and pushes it straight back, since the refilled way is the freshest line in the set.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_hit()`: O(W) where W is the number of ways (associativity)
//!   - `evict()`: O(1)
//! - **Space Complexity:** O(S × W) where S is the number of sets

use std::collections::VecDeque;

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// One recency queue per set. Front is LRU, back is MRU.
    usage: Vec<VecDeque<usize>>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with every set empty.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            usage: vec![VecDeque::with_capacity(ways); sets],
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves `way` to the MRU end, removing it first if present.
    fn record_hit(&mut self, set: usize, way: usize) {
        let queue = &mut self.usage[set];
        if let Some(pos) = queue.iter().position(|&w| w == way) {
            let _ = queue.remove(pos);
        }
        queue.push_back(way);
    }

    fn record_insert(&mut self, set: usize, way: usize) {
        debug_assert!(!self.usage[set].contains(&way), "way {way} filled twice");
        self.usage[set].push_back(way);
    }

    /// Pops the LRU way and re-appends it as MRU.
    fn evict(&mut self, set: usize) -> usize {
        let queue = &mut self.usage[set];
        // Only called on full sets, so the queue holds every way.
        let victim = queue.pop_front().unwrap_or_default();
        queue.push_back(victim);
        victim
    }

    fn order(&self, set: usize) -> Option<Vec<usize>> {
        Some(self.usage[set].iter().copied().collect())
    }
}
