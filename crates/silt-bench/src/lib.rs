//! Benchmark profiles and utilities for the Silt byte store.
//!
//! Provides pre-built store fixtures for benchmarking and examples:
//!
//! - [`scattered_store`]: a store with a seeded random liveness pattern
//! - [`reference_store`]: 64 KiB, half live — the reference profile
//! - [`stress_store`]: 4 MiB, half live — for stress runs
//! - [`checkerboard_store`]: every second byte live, the worst case for
//!   contiguous-run scans

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use silt_store::Store;

/// Build a store of `capacity` bytes with roughly `live_fraction` of its
/// bytes live, scattered by a ChaCha8 RNG seeded from `seed`.
///
/// Placement is fully deterministic: the same `(capacity, live_fraction,
/// seed)` triple always produces the same store, byte for byte.
pub fn scattered_store(capacity: usize, live_fraction: f64, seed: u64) -> Store {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut store = Store::new(capacity).unwrap();
    for ptr in 0..capacity {
        if rng.random_bool(live_fraction) {
            store.poke(ptr, rng.random()).unwrap();
        }
    }
    store
}

/// Build the reference benchmark profile: 64 KiB, half live.
pub fn reference_store(seed: u64) -> Store {
    scattered_store(64 * 1024, 0.5, seed)
}

/// Build the stress benchmark profile: 4 MiB, half live.
///
/// Same shape as [`reference_store`] at 64x the capacity.
pub fn stress_store(seed: u64) -> Store {
    scattered_store(4 * 1024 * 1024, 0.5, seed)
}

/// Build a store with every odd byte live.
///
/// Every free run has length one, so any multi-byte reservation is forced
/// through the compaction fallback.
pub fn checkerboard_store(capacity: usize) -> Store {
    let mut store = Store::new(capacity).unwrap();
    for ptr in (1..capacity).step_by(2) {
        store.poke(ptr, (ptr & 0xFF) as u8).unwrap();
    }
    store
}
