//! Packed per-byte liveness map.
//!
//! One bit per store byte, packed into `u64` words, with a maintained
//! set-bit count so `live_count`/`free_count` are O(1) instead of a scan.
//! The scans used by reservation and compaction (`first_zero`,
//! `first_zero_run`, `first_rise`) skip whole words where possible.
//!
//! Padding bits in the last word (positions at or past `len`) are always
//! zero. Every mutation goes through `set`/`clear`/`set_range`/`clear_range`,
//! which only touch in-range bits, so the scans can rely on that invariant.

/// Bits per storage word.
const WORD_BITS: usize = 64;

/// Bit-per-byte liveness map with O(1) population count.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LiveMap {
    /// Packed bits, least-significant bit first within each word.
    words: Vec<u64>,
    /// Number of tracked bits (the store capacity).
    len: usize,
    /// Number of set bits, maintained on every mutation.
    live: usize,
}

impl LiveMap {
    /// Create an all-clear map tracking `len` bits.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
            live: 0,
        }
    }

    /// Number of set bits.
    pub(crate) fn live_count(&self) -> usize {
        self.live
    }

    /// Number of clear bits.
    pub(crate) fn free_count(&self) -> usize {
        self.len - self.live
    }

    /// Backing allocation size in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }

    /// Whether bit `idx` is set.
    pub(crate) fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        self.words[idx / WORD_BITS] & (1u64 << (idx % WORD_BITS)) != 0
    }

    /// Set bit `idx`. Idempotent; the count only moves on a real transition.
    pub(crate) fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        let mask = 1u64 << (idx % WORD_BITS);
        let word = &mut self.words[idx / WORD_BITS];
        if *word & mask == 0 {
            *word |= mask;
            self.live += 1;
        }
    }

    /// Clear bit `idx`. Idempotent.
    pub(crate) fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        let mask = 1u64 << (idx % WORD_BITS);
        let word = &mut self.words[idx / WORD_BITS];
        if *word & mask != 0 {
            *word &= !mask;
            self.live -= 1;
        }
    }

    /// Set every bit in `[start, start + count)`, whole words at a time
    /// where the range covers them.
    pub(crate) fn set_range(&mut self, start: usize, count: usize) {
        debug_assert!(start + count <= self.len);
        let end = start + count;
        let mut idx = start;
        while idx < end {
            if idx % WORD_BITS == 0 && idx + WORD_BITS <= end {
                let word = &mut self.words[idx / WORD_BITS];
                self.live += word.count_zeros() as usize;
                *word = u64::MAX;
                idx += WORD_BITS;
            } else {
                self.set(idx);
                idx += 1;
            }
        }
    }

    /// Clear every bit in `[start, start + count)`, whole words at a time
    /// where the range covers them.
    pub(crate) fn clear_range(&mut self, start: usize, count: usize) {
        debug_assert!(start + count <= self.len);
        let end = start + count;
        let mut idx = start;
        while idx < end {
            if idx % WORD_BITS == 0 && idx + WORD_BITS <= end {
                let word = &mut self.words[idx / WORD_BITS];
                self.live -= word.count_ones() as usize;
                *word = 0;
                idx += WORD_BITS;
            } else {
                self.clear(idx);
                idx += 1;
            }
        }
    }

    /// Exchange bits `i` and `j`. The count is unchanged.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.len && j < self.len);
        let a = self.get(i);
        let b = self.get(j);
        if a && !b {
            self.clear(i);
            self.set(j);
        } else if !a && b {
            self.set(i);
            self.clear(j);
        }
    }

    /// Index of the lowest clear bit, or `None` if every bit is set.
    pub(crate) fn first_zero(&self) -> Option<usize> {
        for (wi, &word) in self.words.iter().enumerate() {
            if word != u64::MAX {
                let idx = wi * WORD_BITS + (!word).trailing_zeros() as usize;
                if idx < self.len {
                    return Some(idx);
                }
                // Only padding bits are clear from here on.
                return None;
            }
        }
        None
    }

    /// Start of the lowest run of `run` consecutive clear bits, or `None`.
    ///
    /// Left-to-right streak scan. Whole clear words extend the streak by 64
    /// in one step; whole set words reset it in one step; mixed words fall
    /// back to bit tests. Returns the first position where the streak
    /// reaches `run`, which is the first-fit position.
    pub(crate) fn first_zero_run(&self, run: usize) -> Option<usize> {
        if run == 0 {
            return Some(0);
        }
        let mut streak = 0;
        let mut idx = 0;
        while idx < self.len {
            if idx % WORD_BITS == 0 && idx + WORD_BITS <= self.len {
                let word = self.words[idx / WORD_BITS];
                if word == 0 {
                    streak += WORD_BITS;
                    idx += WORD_BITS;
                    if streak >= run {
                        return Some(idx - streak);
                    }
                    continue;
                }
                if word == u64::MAX {
                    streak = 0;
                    idx += WORD_BITS;
                    continue;
                }
            }
            if self.get(idx) {
                streak = 0;
            } else {
                streak += 1;
                if streak == run {
                    return Some(idx + 1 - streak);
                }
            }
            idx += 1;
        }
        None
    }

    /// Lowest `i >= start` where bit `i` is clear and bit `i + 1` is set,
    /// or `None` if no such adjacent pair exists.
    ///
    /// Per word, `!w & (w >> 1)` marks every in-word clear/set adjacency;
    /// the seam into the next word is patched in from its lowest bit. A hit
    /// always has its partner in range: the partner bit is set, and padding
    /// bits are never set.
    pub(crate) fn first_rise(&self, start: usize) -> Option<usize> {
        if self.len < 2 || start >= self.len - 1 {
            return None;
        }
        let start_word = start / WORD_BITS;
        for wi in start_word..self.words.len() {
            let word = self.words[wi];
            let next = if wi + 1 < self.words.len() {
                self.words[wi + 1]
            } else {
                0
            };
            let mut pattern = !word & (word >> 1);
            if word >> (WORD_BITS - 1) == 0 && next & 1 == 1 {
                pattern |= 1u64 << (WORD_BITS - 1);
            }
            if wi == start_word {
                pattern &= u64::MAX << (start % WORD_BITS);
            }
            if pattern != 0 {
                return Some(wi * WORD_BITS + pattern.trailing_zeros() as usize);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_all_clear() {
        let map = LiveMap::new(100);
        assert_eq!(map.len, 100);
        assert_eq!(map.live_count(), 0);
        assert_eq!(map.free_count(), 100);
        assert!((0..100).all(|i| !map.get(i)));
    }

    #[test]
    fn set_and_clear_maintain_the_count() {
        let mut map = LiveMap::new(70);
        map.set(0);
        map.set(63);
        map.set(64);
        map.set(69);
        assert_eq!(map.live_count(), 4);
        assert!(map.get(63));
        assert!(map.get(64));

        map.clear(63);
        assert_eq!(map.live_count(), 3);
        assert!(!map.get(63));
    }

    #[test]
    fn set_and_clear_are_idempotent() {
        let mut map = LiveMap::new(16);
        map.set(5);
        map.set(5);
        assert_eq!(map.live_count(), 1);
        map.clear(5);
        map.clear(5);
        assert_eq!(map.live_count(), 0);
    }

    #[test]
    fn range_ops_cross_word_boundaries() {
        let mut map = LiveMap::new(200);
        map.set_range(60, 70);
        assert_eq!(map.live_count(), 70);
        assert!(!map.get(59));
        assert!(map.get(60));
        assert!(map.get(129));
        assert!(!map.get(130));

        map.clear_range(64, 64);
        assert_eq!(map.live_count(), 6);
        assert!(map.get(60));
        assert!(map.get(63));
        assert!(!map.get(64));
        assert!(!map.get(127));
        assert!(map.get(128));
    }

    #[test]
    fn set_range_counts_only_new_bits() {
        let mut map = LiveMap::new(128);
        map.set(10);
        map.set(70);
        map.set_range(0, 128);
        assert_eq!(map.live_count(), 128);
    }

    #[test]
    fn swap_moves_a_bit_without_changing_the_count() {
        let mut map = LiveMap::new(128);
        map.set(3);
        map.swap(3, 100);
        assert!(!map.get(3));
        assert!(map.get(100));
        assert_eq!(map.live_count(), 1);

        // Equal bits swap to a no-op.
        map.swap(3, 4);
        map.swap(100, 100);
        assert_eq!(map.live_count(), 1);
        assert!(map.get(100));
    }

    #[test]
    fn first_zero_finds_the_lowest_hole() {
        let mut map = LiveMap::new(130);
        assert_eq!(map.first_zero(), Some(0));
        map.set_range(0, 130);
        assert_eq!(map.first_zero(), None);
        map.clear(64);
        assert_eq!(map.first_zero(), Some(64));
        map.clear(63);
        assert_eq!(map.first_zero(), Some(63));
    }

    #[test]
    fn first_zero_ignores_padding_bits() {
        // 65 bits: the second word is one real bit plus 63 padding zeros.
        let mut map = LiveMap::new(65);
        map.set_range(0, 65);
        assert_eq!(map.first_zero(), None);
        map.clear(64);
        assert_eq!(map.first_zero(), Some(64));
    }

    #[test]
    fn first_zero_run_finds_the_first_fit() {
        let mut map = LiveMap::new(32);
        // Live at 0, 3, 4; holes: [1,2], [5..32).
        map.set(0);
        map.set(3);
        map.set(4);
        assert_eq!(map.first_zero_run(1), Some(1));
        assert_eq!(map.first_zero_run(2), Some(1));
        assert_eq!(map.first_zero_run(3), Some(5));
        assert_eq!(map.first_zero_run(27), Some(5));
        assert_eq!(map.first_zero_run(28), None);
    }

    #[test]
    fn first_zero_run_crosses_word_boundaries() {
        let mut map = LiveMap::new(200);
        map.set_range(0, 200);
        map.clear_range(60, 10);
        assert_eq!(map.first_zero_run(10), Some(60));
        assert_eq!(map.first_zero_run(11), None);

        // A streak spanning three words.
        map.clear_range(100, 100);
        assert_eq!(map.first_zero_run(100), Some(100));
        assert_eq!(map.first_zero_run(101), None);
    }

    #[test]
    fn first_zero_run_over_an_empty_map_starts_at_zero() {
        let map = LiveMap::new(256);
        assert_eq!(map.first_zero_run(256), Some(0));
        assert_eq!(map.first_zero_run(257), None);
    }

    #[test]
    fn first_rise_finds_a_hole_before_a_live_bit() {
        let mut map = LiveMap::new(32);
        map.set(0);
        map.set(5);
        map.set(6);
        // Bit 4 is the clear bit directly before live bit 5.
        assert_eq!(map.first_rise(0), Some(4));
        assert_eq!(map.first_rise(5), None);
    }

    #[test]
    fn first_rise_respects_the_start_bound() {
        let mut map = LiveMap::new(32);
        map.set(2);
        map.set(10);
        assert_eq!(map.first_rise(0), Some(1));
        // Starting past the first rise skips it.
        assert_eq!(map.first_rise(2), Some(9));
        assert_eq!(map.first_rise(10), None);
    }

    #[test]
    fn first_rise_sees_the_word_seam() {
        let mut map = LiveMap::new(128);
        map.set(64);
        // Bit 63 clear, bit 64 set: the rise sits on the word boundary.
        assert_eq!(map.first_rise(0), Some(63));
        assert_eq!(map.first_rise(63), Some(63));
        assert_eq!(map.first_rise(64), None);
    }

    #[test]
    fn first_rise_on_a_compacted_prefix_is_none() {
        let mut map = LiveMap::new(96);
        map.set_range(0, 40);
        assert_eq!(map.first_rise(0), None);
        assert_eq!(map.first_rise(39), None);
    }

    #[test]
    fn first_rise_handles_tiny_and_out_of_range_starts() {
        let map = LiveMap::new(16);
        assert_eq!(map.first_rise(15), None);
        assert_eq!(map.first_rise(16), None);
        assert_eq!(map.first_rise(usize::MAX), None);
    }
}
