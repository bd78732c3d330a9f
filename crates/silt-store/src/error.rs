//! Store-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during store operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Requested capacity outside the supported range.
    InvalidCapacity {
        /// Capacity requested at construction.
        requested: usize,
        /// Smallest supported capacity.
        min: usize,
        /// Largest supported capacity.
        max: usize,
    },
    /// A pointer past the end of the store.
    OutOfBounds {
        /// The offending pointer.
        ptr: usize,
        /// Store capacity in bytes.
        capacity: usize,
    },
    /// A byte span that does not fit inside the store.
    BadRange {
        /// First byte of the span.
        start: usize,
        /// Span length in bytes.
        len: usize,
        /// Store capacity in bytes.
        capacity: usize,
    },
    /// A reservation larger than the total free space.
    InsufficientMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Number of free bytes in the store.
        free: usize,
    },
    /// Enough free bytes in total, but no contiguous run of the requested
    /// size even after the one-shot compaction retry.
    Fragmented {
        /// Number of contiguous bytes requested.
        requested: usize,
        /// Number of free bytes in the store.
        free: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity {
                requested,
                min,
                max,
            } => {
                write!(
                    f,
                    "invalid store capacity: requested {requested} bytes, supported range {min}..={max}"
                )
            }
            Self::OutOfBounds { ptr, capacity } => {
                write!(f, "pointer {ptr} out of bounds for capacity {capacity}")
            }
            Self::BadRange {
                start,
                len,
                capacity,
            } => {
                write!(
                    f,
                    "byte range at {start} with length {len} exceeds capacity {capacity}"
                )
            }
            Self::InsufficientMemory { requested, free } => {
                write!(
                    f,
                    "insufficient memory: requested {requested} bytes, {free} bytes free"
                )
            }
            Self::Fragmented { requested, free } => {
                write!(
                    f,
                    "free space too fragmented: requested {requested} contiguous bytes, {free} bytes free in total"
                )
            }
        }
    }
}

impl Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_numbers() {
        let e = StoreError::InvalidCapacity {
            requested: 8,
            min: 16,
            max: 64_000_000,
        };
        assert_eq!(
            e.to_string(),
            "invalid store capacity: requested 8 bytes, supported range 16..=64000000"
        );

        let e = StoreError::OutOfBounds {
            ptr: 32,
            capacity: 32,
        };
        assert_eq!(e.to_string(), "pointer 32 out of bounds for capacity 32");

        let e = StoreError::Fragmented {
            requested: 4,
            free: 7,
        };
        assert_eq!(
            e.to_string(),
            "free space too fragmented: requested 4 contiguous bytes, 7 bytes free in total"
        );
    }
}
