//! First-fit reservation with a one-shot compaction fallback.
//!
//! A reservation needs `size` contiguous free bytes. The happy path is a
//! single first-fit scan of the liveness map. When the total free space is
//! sufficient but scattered, one full `arrange(0)` pass consolidates it
//! into a single tail run and the scan is retried exactly once — there is
//! no further retry loop.

use crate::error::StoreError;
use crate::store::Store;

impl Store {
    /// Reserve `size` contiguous bytes and return the run's first pointer.
    ///
    /// The run is marked live; its bytes stay zero until written. A
    /// zero-length request returns pointer 0 without marking anything.
    ///
    /// Failure modes:
    /// - [`StoreError::InsufficientMemory`] when `size` exceeds the total
    ///   free count — no run can possibly exist.
    /// - [`StoreError::Fragmented`] when even the post-compaction rescan
    ///   finds no run.
    ///
    /// The fallback pass moves live bytes. Pointers obtained before the
    /// call are invalidated whenever `stats().compaction_fallbacks` ticks
    /// up, so callers interleaving raw pointers with reservation must
    /// re-derive them.
    pub fn reserve(&mut self, size: usize) -> Result<usize, StoreError> {
        if size == 0 {
            return Ok(0);
        }
        let free = self.free_count();
        if size > free {
            return Err(StoreError::InsufficientMemory {
                requested: size,
                free,
            });
        }

        if let Some(start) = self.take_run(size) {
            return Ok(start);
        }

        self.arrange(0);
        self.stats.compaction_fallbacks += 1;
        self.take_run(size).ok_or(StoreError::Fragmented {
            requested: size,
            free,
        })
    }

    /// Claim the lowest free run of `size` bytes, if one exists.
    fn take_run(&mut self, size: usize) -> Option<usize> {
        let start = self.live.first_zero_run(size)?;
        self.live.set_range(start, size);
        self.stats.reservations += 1;
        Some(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_from_pattern(pattern: &[Option<u8>]) -> Store {
        let mut store = Store::new(pattern.len()).unwrap();
        for (ptr, slot) in pattern.iter().enumerate() {
            if let Some(value) = slot {
                store.poke(ptr, *value).unwrap();
            }
        }
        store
    }

    #[test]
    fn reserve_takes_the_lowest_fit() {
        let mut store = Store::new(16).unwrap();
        assert_eq!(store.reserve(4).unwrap(), 0);
        assert_eq!(store.reserve(2).unwrap(), 4);
        assert_eq!(store.live_count(), 6);
        // Reserved bytes are live but still read as zero.
        for ptr in 0..6 {
            assert!(store.is_live(ptr).unwrap());
            assert_eq!(store.peek(ptr).unwrap(), 0);
        }
    }

    #[test]
    fn reserve_prefers_a_hole_over_the_tail() {
        let mut store = Store::new(16).unwrap();
        store.write_slice(0, &[1; 12]).unwrap();
        store.free_range(4, 4).unwrap();
        // Holes: [4, 8) and the tail [12, 16).
        assert_eq!(store.reserve(3).unwrap(), 4);
        assert_eq!(store.stats().compaction_fallbacks, 0);
    }

    #[test]
    fn reserve_zero_marks_nothing() {
        let mut store = Store::new(16).unwrap();
        store.poke(0, 1).unwrap();
        assert_eq!(store.reserve(0).unwrap(), 0);
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.stats().reservations, 0);
    }

    #[test]
    fn reserve_more_than_free_fails_without_touching_anything() {
        let mut store = Store::new(16).unwrap();
        store.write_slice(0, &[1; 10]).unwrap();
        assert_eq!(
            store.reserve(7),
            Err(StoreError::InsufficientMemory {
                requested: 7,
                free: 6,
            })
        );
        assert_eq!(store.live_count(), 10);
        assert_eq!(store.stats().compaction_fallbacks, 0);
    }

    #[test]
    fn reserve_finds_an_existing_run_without_compacting() {
        // Live at 0, 2, 4, then byte 2 freed: the hole at 1..4 already
        // fits a run of 2, so the first-fit scan wins outright.
        let mut store = Store::new(16).unwrap();
        store.poke(0, 1).unwrap();
        store.poke(2, 2).unwrap();
        store.poke(4, 3).unwrap();
        store.free(2).unwrap();

        assert_eq!(store.reserve(2).unwrap(), 1);
        assert_eq!(store.stats().compaction_fallbacks, 0);
        assert_eq!(store.stats().compaction_passes, 0);
    }

    #[test]
    fn reserve_falls_back_to_compaction_when_fragmented() {
        // Every other byte live: eight free bytes but no run of two.
        let mut store = Store::new(16).unwrap();
        for ptr in (0..16).step_by(2) {
            store.poke(ptr, ptr as u8 + 1).unwrap();
        }

        let start = store.reserve(2).unwrap();

        // The internal arrange packed the eight live bytes into [0, 8),
        // so the run lands directly after them.
        assert_eq!(start, 8);
        assert_eq!(store.stats().compaction_fallbacks, 1);
        assert_eq!(store.stats().compaction_passes, 1);
        assert_eq!(store.live_count(), 10);
        let packed: Vec<u8> = (0..8).map(|ptr| store.peek(ptr).unwrap()).collect();
        assert_eq!(packed, vec![1, 3, 5, 7, 9, 11, 13, 15]);
        assert!(store.is_live(8).unwrap());
        assert!(store.is_live(9).unwrap());
    }

    #[test]
    fn reserve_can_consume_the_whole_store() {
        let mut store = Store::new(16).unwrap();
        assert_eq!(store.reserve(16).unwrap(), 0);
        assert_eq!(store.free_count(), 0);
        assert_eq!(
            store.reserve(1),
            Err(StoreError::InsufficientMemory {
                requested: 1,
                free: 0,
            })
        );
    }

    #[test]
    fn reservations_are_counted() {
        let mut store = Store::new(32).unwrap();
        store.reserve(4).unwrap();
        store.reserve(4).unwrap();
        store.reserve(0).unwrap();
        assert_eq!(store.stats().reservations, 2);
    }

    proptest! {
        #[test]
        fn reserve_keeps_counts_consistent(
            pattern in prop::collection::vec(prop::option::of(any::<u8>()), 16..128),
            size in 0usize..48,
        ) {
            let mut store = store_from_pattern(&pattern);
            let free_before = store.free_count();
            let live_before = store.live_count();

            match store.reserve(size) {
                Ok(start) => {
                    if size == 0 {
                        prop_assert_eq!(start, 0);
                        prop_assert_eq!(store.live_count(), live_before);
                    } else {
                        prop_assert!(size <= free_before);
                        prop_assert_eq!(store.live_count(), live_before + size);
                        for ptr in start..start + size {
                            prop_assert!(store.is_live(ptr).unwrap());
                        }
                    }
                }
                Err(StoreError::InsufficientMemory { requested, free }) => {
                    prop_assert_eq!(requested, size);
                    prop_assert_eq!(free, free_before);
                    prop_assert!(size > free_before);
                    prop_assert_eq!(store.live_count(), live_before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
            prop_assert_eq!(store.free_count() + store.live_count(), store.capacity());
        }
    }
}
