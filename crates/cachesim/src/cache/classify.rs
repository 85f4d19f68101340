//! Miss classification.
//!
//! Every miss is exactly one of:
//!
//! | Kind       | Condition                                                   |
//! |------------|-------------------------------------------------------------|
//! | Compulsory | the target set still has an invalid way                     |
//! | Capacity   | the target set is full and so is every other set            |
//! | Conflict   | the target set is full but some other set still has room    |
//!
//! The capacity/conflict split needs the occupancy of the whole cache, not just of
//! the target set.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::store::CacheStore;

/// The three miss categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissKind {
    /// First occupant of a slot (cold miss).
    Compulsory,
    /// The whole cache is occupied.
    Capacity,
    /// The set is occupied while the cache still has room elsewhere.
    Conflict,
}

impl MissKind {
    /// All kinds, in report order.
    pub const ALL: [Self; 3] = [Self::Compulsory, Self::Capacity, Self::Conflict];

    /// Lowercase name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compulsory => "compulsory",
            Self::Capacity => "capacity",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for MissKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying a miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissClassification {
    /// The miss category.
    pub kind: MissKind,
    /// For compulsory misses, the way the block should be filled into.
    pub empty_way: Option<usize>,
}

/// Classifies a miss at `set` against the current contents of `store`.
///
/// Must be called before the missing block is inserted.
pub fn classify(store: &CacheStore, set: usize) -> MissClassification {
    if let Some(way) = store.find_empty_way(set) {
        return MissClassification {
            kind: MissKind::Compulsory,
            empty_way: Some(way),
        };
    }
    let kind = if store.is_globally_full() {
        MissKind::Capacity
    } else {
        MissKind::Conflict
    };
    MissClassification {
        kind,
        empty_way: None,
    }
}
