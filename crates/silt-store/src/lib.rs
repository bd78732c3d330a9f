//! Fixed-capacity byte store with per-byte liveness and swap-based compaction.
//!
//! Provides [`Store`], a zero-initialised byte region of fixed capacity in
//! which every byte is individually tracked as live or free. Writing marks
//! bytes live, freeing zeroes them, compaction slides live bytes to the low
//! end, and [`Store::reserve`] hands out contiguous runs first-fit with a
//! one-shot compaction fallback. Everything is deterministic and
//! single-threaded; there are no suspension points and no internal locking.
//!
//! # Architecture
//!
//! ```text
//! Store
//! ├── bytes: Vec<u8>      zero-initialised region, never resized
//! ├── live:  LiveMap      one bit per byte, packed u64 words + set-bit count
//! └── stats: StoreStats   cumulative reservation/compaction counters
//! ```
//!
//! The liveness map is the workhorse: population counts are O(1) from the
//! maintained counter, and the reservation and compaction scans skip whole
//! 64-bit words where they can.
//!
//! # Invariants
//!
//! - A byte is free exactly when its liveness bit is clear, and a free byte
//!   always reads as zero. Live bytes may hold any value, including zero.
//! - `free_count() + live_count() == capacity()` after every operation.
//! - Compaction moves a byte and its liveness bit together; no operation
//!   can separate them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod compact;
pub mod dump;
pub mod error;
mod live;
mod reserve;
pub mod stats;
pub mod store;

pub use dump::HexDump;
pub use error::StoreError;
pub use stats::StoreStats;
pub use store::Store;
