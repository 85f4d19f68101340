//! # Miss Classification Tests
//!
//! A miss is compulsory while its set has room, capacity once the whole cache is
//! full, and conflict in between.

use cachesim_core::cache::{CacheStore, MissClassification, MissKind, classify};

#[test]
fn test_empty_set_is_compulsory_with_first_way() {
    let store = CacheStore::new(2, 2);
    assert_eq!(
        classify(&store, 1),
        MissClassification {
            kind: MissKind::Compulsory,
            empty_way: Some(0)
        }
    );
}

#[test]
fn test_partially_filled_set_is_compulsory() {
    let mut store = CacheStore::new(1, 3);
    store.insert(0, 0, 1);
    let miss = classify(&store, 0);
    assert_eq!(miss.kind, MissKind::Compulsory);
    assert_eq!(miss.empty_way, Some(1));
}

#[test]
fn test_full_set_with_room_elsewhere_is_conflict() {
    let mut store = CacheStore::new(2, 1);
    store.insert(0, 0, 1);
    assert_eq!(
        classify(&store, 0),
        MissClassification {
            kind: MissKind::Conflict,
            empty_way: None
        }
    );
    // The other set is still compulsory.
    assert_eq!(classify(&store, 1).kind, MissKind::Compulsory);
}

#[test]
fn test_full_cache_is_capacity() {
    let mut store = CacheStore::new(2, 2);
    for set in 0..2 {
        for way in 0..2 {
            store.insert(set, way, (set * 2 + way) as u64);
        }
    }
    for set in 0..2 {
        assert_eq!(classify(&store, set).kind, MissKind::Capacity);
        assert_eq!(classify(&store, set).empty_way, None);
    }
}

#[test]
fn test_single_entry_cache_is_capacity_once_filled() {
    let mut store = CacheStore::new(1, 1);
    assert_eq!(classify(&store, 0).kind, MissKind::Compulsory);
    store.insert(0, 0, 0);
    assert_eq!(classify(&store, 0).kind, MissKind::Capacity);
}

#[test]
fn test_miss_kind_names() {
    let names: Vec<_> = MissKind::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["compulsory", "capacity", "conflict"]);
}
