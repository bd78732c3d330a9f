//! Error types for the codec.

use std::fmt;
use std::str::Utf8Error;

use silt_store::StoreError;

/// Errors that can occur while encoding or decoding values in a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A bounds failure surfaced by the underlying store.
    Store(StoreError),
    /// A stored boolean byte that is neither 0 nor 1.
    CorruptBool {
        /// The byte actually found.
        value: u8,
    },
    /// A string payload that is not valid UTF-8.
    Utf8(Utf8Error),
    /// A string too long for its 2-byte length prefix.
    StringTooLong {
        /// Length of the rejected string in bytes.
        len: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "store error: {e}"),
            Self::CorruptBool { value } => {
                write!(f, "corrupt boolean: byte {value:#04x} is neither 0 nor 1")
            }
            Self::Utf8(e) => write!(f, "string payload is not valid UTF-8: {e}"),
            Self::StringTooLong { len } => {
                write!(
                    f,
                    "string of {len} bytes exceeds the u16 length prefix (max {})",
                    u16::MAX
                )
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for CodecError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<Utf8Error> for CodecError {
    fn from(e: Utf8Error) -> Self {
        Self::Utf8(e)
    }
}
