//! Cumulative store operation counters.
//!
//! [`StoreStats`] captures reservation and compaction activity over the
//! lifetime of a store, enabling telemetry and test assertions about which
//! path an operation took (for example, whether a reservation had to fall
//! back to compaction).

/// Counters accumulated across all operations on a store.
///
/// The store updates these in place; consumers read them through
/// `Store::stats`. All counters start at zero and only ever grow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreStats {
    /// Number of successful reservations (zero-length requests excluded).
    pub reservations: u64,
    /// Number of full compaction sweeps, whether caller-issued or internal.
    pub compaction_passes: u64,
    /// Number of reservations that fell back to an internal compaction
    /// sweep after the first-fit scan found no run.
    pub compaction_fallbacks: u64,
    /// Number of bytes moved by compaction, counting single-step pushes.
    pub bytes_relocated: u64,
}
