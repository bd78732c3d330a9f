//! The fixed-capacity byte store.
//!
//! [`Store`] owns a zero-initialised byte region and a packed liveness map
//! tracking which bytes are in use. Capacity is fixed at construction and
//! the region is never resized. Writing a byte marks it live; freeing a
//! byte zeroes it and clears the mark, so a free byte always reads as zero.

use crate::error::StoreError;
use crate::live::LiveMap;
use crate::stats::StoreStats;

/// A fixed-capacity, byte-addressable memory region with per-byte liveness.
///
/// All access goes through pointer-based accessors; the backing storage and
/// the liveness map are private so the free-byte-is-zero invariant cannot be
/// broken from outside. Pointers are plain byte offsets in `[0, capacity)`
/// with no alignment constraints.
///
/// Reservation may compact the region (see `Store::reserve`), which moves
/// live bytes. Pointers handed out before a compaction are invalidated by
/// it; sequencing is the caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct Store {
    /// Backing bytes, zero-initialised, length fixed at capacity.
    pub(crate) bytes: Vec<u8>,
    /// One liveness bit per backing byte.
    pub(crate) live: LiveMap,
    /// Cumulative operation counters.
    pub(crate) stats: StoreStats,
}

impl Store {
    /// Smallest supported capacity in bytes.
    pub const MIN_CAPACITY: usize = 16;

    /// Largest supported capacity in bytes.
    pub const MAX_CAPACITY: usize = 64_000_000;

    /// Create a store of exactly `capacity` bytes, all free and zeroed.
    ///
    /// Returns [`StoreError::InvalidCapacity`] outside
    /// `MIN_CAPACITY..=MAX_CAPACITY`; no storage is allocated in that case.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        if !(Self::MIN_CAPACITY..=Self::MAX_CAPACITY).contains(&capacity) {
            return Err(StoreError::InvalidCapacity {
                requested: capacity,
                min: Self::MIN_CAPACITY,
                max: Self::MAX_CAPACITY,
            });
        }
        Ok(Self {
            bytes: vec![0; capacity],
            live: LiveMap::new(capacity),
            stats: StoreStats::default(),
        })
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of free bytes. O(1).
    pub fn free_count(&self) -> usize {
        self.live.free_count()
    }

    /// Number of live bytes. O(1).
    pub fn live_count(&self) -> usize {
        self.live.live_count()
    }

    /// Lowest free pointer, or `None` when every byte is live.
    pub fn first_free(&self) -> Option<usize> {
        self.live.first_zero()
    }

    /// Whether the byte at `ptr` is live.
    pub fn is_live(&self, ptr: usize) -> Result<bool, StoreError> {
        self.check_ptr(ptr)?;
        Ok(self.live.get(ptr))
    }

    /// Read the byte at `ptr` without touching its liveness.
    pub fn peek(&self, ptr: usize) -> Result<u8, StoreError> {
        self.check_ptr(ptr)?;
        Ok(self.bytes[ptr])
    }

    /// Write the byte at `ptr`, marking it live, and return `ptr + 1`.
    ///
    /// Writing and allocating are the same operation: there is no separate
    /// "mark in use" step for a byte that has been written.
    pub fn poke(&mut self, ptr: usize, value: u8) -> Result<usize, StoreError> {
        self.check_ptr(ptr)?;
        self.bytes[ptr] = value;
        self.live.set(ptr);
        Ok(ptr + 1)
    }

    /// Shared view of the bytes in `[ptr, ptr + len)`, liveness untouched.
    pub fn slice(&self, ptr: usize, len: usize) -> Result<&[u8], StoreError> {
        let end = self.span_end(ptr, len)?;
        Ok(&self.bytes[ptr..end])
    }

    /// Write `data` starting at `ptr`, marking the span live, and return
    /// the next unused pointer.
    ///
    /// The span is validated before anything is written, so a failed call
    /// leaves the store untouched.
    pub fn write_slice(&mut self, ptr: usize, data: &[u8]) -> Result<usize, StoreError> {
        let end = self.span_end(ptr, data.len())?;
        self.bytes[ptr..end].copy_from_slice(data);
        self.live.set_range(ptr, data.len());
        Ok(end)
    }

    /// Free the byte at `ptr`: zero it and clear its liveness bit.
    ///
    /// Freeing an already-free byte is a no-op.
    pub fn free(&mut self, ptr: usize) -> Result<(), StoreError> {
        self.check_ptr(ptr)?;
        self.bytes[ptr] = 0;
        self.live.clear(ptr);
        Ok(())
    }

    /// Free every byte in the half-open range `[start, start + count)`.
    pub fn free_range(&mut self, start: usize, count: usize) -> Result<(), StoreError> {
        let end = self.span_end(start, count)?;
        self.bytes[start..end].fill(0);
        self.live.clear_range(start, count);
        Ok(())
    }

    /// Total backing allocation in bytes: the byte region plus the packed
    /// liveness words.
    pub fn memory_bytes(&self) -> usize {
        self.bytes.len() + self.live.memory_bytes()
    }

    /// Cumulative operation counters for this store.
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }

    pub(crate) fn check_ptr(&self, ptr: usize) -> Result<(), StoreError> {
        if ptr >= self.capacity() {
            return Err(StoreError::OutOfBounds {
                ptr,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Validate the span `[start, start + len)` and return its end,
    /// rejecting both overflow and spans past the capacity.
    pub(crate) fn span_end(&self, start: usize, len: usize) -> Result<usize, StoreError> {
        match start.checked_add(len) {
            Some(end) if end <= self.capacity() => Ok(end),
            _ => Err(StoreError::BadRange {
                start,
                len,
                capacity: self.capacity(),
            }),
        }
    }
}
