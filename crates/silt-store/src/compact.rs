//! Compaction: swap, single-step push, and the full arrange sweep.
//!
//! Compaction slides live bytes toward the low end of a region so the free
//! bytes form one contiguous tail. `push` performs a single step — the
//! lowest free/live adjacency is exchanged — while `arrange` reaches the
//! fully compacted state in one linear sweep. Repeating `push` until it
//! returns `None` lands in exactly the state `arrange` produces.

use crate::error::StoreError;
use crate::store::Store;

impl Store {
    /// Exchange the bytes at `i` and `j` together with their liveness bits.
    ///
    /// Both pointers are validated before anything moves, so a failed call
    /// leaves the store untouched.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), StoreError> {
        self.check_ptr(i)?;
        self.check_ptr(j)?;
        self.bytes.swap(i, j);
        self.live.swap(i, j);
        Ok(())
    }

    /// One compaction step from `start`.
    ///
    /// Finds the lowest pointer `i >= start` where byte `i` is free and
    /// byte `i + 1` is live, exchanges the pair, and returns `Some(i)`.
    /// Returns `None` — and changes nothing — when no such pair exists,
    /// including for any `start` at or past the last byte.
    pub fn push(&mut self, start: usize) -> Option<usize> {
        let i = self.live.first_rise(start)?;
        self.bytes.swap(i, i + 1);
        self.live.swap(i, i + 1);
        self.stats.bytes_relocated += 1;
        Some(i)
    }

    /// Compact `[start, capacity)` in one pass and return the number of
    /// bytes that moved.
    ///
    /// Live bytes slide down to form a contiguous run from `start`,
    /// keeping their relative order; the freed tail reads as zero. The
    /// sweep is a single two-pointer pass, linear in `capacity - start`
    /// no matter how fragmented the region is. Afterwards `push(start)`
    /// has nothing left to move. Out-of-range starts are a no-op.
    pub fn arrange(&mut self, start: usize) -> usize {
        let capacity = self.capacity();
        if start >= capacity {
            return 0;
        }

        let mut write = start;
        let mut relocated = 0usize;
        for read in start..capacity {
            if self.live.get(read) {
                if read != write {
                    self.bytes[write] = self.bytes[read];
                    self.bytes[read] = 0;
                    relocated += 1;
                }
                write += 1;
            }
        }
        // Region bits become a solid prefix; counts are maintained by the
        // range operations.
        self.live.clear_range(start, capacity - start);
        self.live.set_range(start, write - start);

        self.stats.compaction_passes += 1;
        self.stats.bytes_relocated += relocated as u64;
        relocated
    }
}
