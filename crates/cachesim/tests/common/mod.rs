//! Shared helpers for the simulator tests.


pub use harness::{addr, outcomes, seeded_sim};
