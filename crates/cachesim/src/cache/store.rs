//! Set/way storage grid.
//!
//! Holds the `num_sets × ways` entries of the simulated cache in a flat, set-major
//! vector. Only tag presence is modeled: an entry is a valid bit and a tag.
//!
//! A running count of valid entries is kept alongside the grid. Entries are never
//! invalidated (an eviction is always followed by a refill of the same slot), so the
//! count only grows and `is_globally_full` is O(1).

/// One (set, way) slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheEntry {
    /// Whether the slot holds a block.
    pub valid: bool,
    /// Tag of the held block; meaningless unless `valid`.
    pub tag: u64,
}

/// The set/way grid of cache entries.
#[derive(Clone, Debug)]
pub struct CacheStore {
    entries: Vec<CacheEntry>,
    num_sets: usize,
    ways: usize,
    valid_entries: usize,
}

impl CacheStore {
    /// Creates a store with every entry invalid.
    ///
    /// # Arguments
    ///
    /// * `num_sets` - Number of sets.
    /// * `ways` - Associativity (entries per set).
    pub fn new(num_sets: usize, ways: usize) -> Self {
        Self {
            entries: vec![CacheEntry::default(); num_sets * ways],
            num_sets,
            ways,
            valid_entries: 0,
        }
    }

    /// Number of sets.
    #[inline]
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Entries per set.
    #[inline]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Total number of entries.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries currently valid.
    #[inline]
    pub const fn valid_entries(&self) -> usize {
        self.valid_entries
    }

    /// The entries of one set, in way order.
    ///
    /// # Panics
    ///
    /// Panics if `set >= num_sets`.
    #[inline]
    pub fn set_entries(&self, set: usize) -> &[CacheEntry] {
        let base = set * self.ways;
        &self.entries[base..base + self.ways]
    }

    /// A single entry, or `None` if out of range.
    pub fn entry(&self, set: usize, way: usize) -> Option<&CacheEntry> {
        if set >= self.num_sets || way >= self.ways {
            return None;
        }
        self.entries.get(set * self.ways + way)
    }

    /// Finds the way in `set` holding a valid block with `tag`.
    #[inline]
    pub fn lookup(&self, set: usize, tag: u64) -> Option<usize> {
        self.set_entries(set)
            .iter()
            .position(|e| e.valid && e.tag == tag)
    }

    /// First invalid way of `set`, scanning from way 0 upward.
    ///
    /// The scan order decides which way a compulsory fill lands in.
    #[inline]
    pub fn find_empty_way(&self, set: usize) -> Option<usize> {
        self.set_entries(set).iter().position(|e| !e.valid)
    }

    /// Writes `tag` into `(set, way)` and marks it valid, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is out of range.
    pub fn insert(&mut self, set: usize, way: usize, tag: u64) {
        assert!(way < self.ways, "way {way} out of range for {} ways", self.ways);
        let entry = &mut self.entries[set * self.ways + way];
        if !entry.valid {
            self.valid_entries += 1;
        }
        *entry = CacheEntry { valid: true, tag };
    }

    /// Whether every entry of every set is valid.
    #[inline]
    pub const fn is_globally_full(&self) -> bool {
        self.valid_entries == self.entries.len()
    }

    /// Recomputes global occupancy by scanning every entry.
    ///
    /// Always agrees with [`is_globally_full`](Self::is_globally_full).
    pub fn scan_globally_full(&self) -> bool {
        self.entries.iter().all(|e| e.valid)
    }
}
