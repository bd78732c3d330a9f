//! Fixed-width value encoding.
//!
//! [`Fixed`] is the contract between the two sides of the codec: a type
//! knows its encoded width and how to lay itself out as big-endian bytes.
//! The generic entry points in [`crate::reader`] and [`crate::writer`]
//! dispatch through it, so one `read`/`write` pair covers every scalar
//! instead of a per-type function family.

use crate::error::CodecError;

/// A value with a fixed-width big-endian encoding.
///
/// `encode` fills a slice of exactly [`Fixed::WIDTH`] bytes and `decode`
/// consumes one; the callers in this crate always pass exact-width slices.
pub trait Fixed: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Lay the value out into `out`, most significant byte first.
    fn encode(self, out: &mut [u8]);

    /// Reconstruct a value from `bytes`.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError>;
}

/// Encoded width of a fixed-width type, in bytes.
pub fn width_of<T: Fixed>() -> usize {
    T::WIDTH
}

/// Encoded width of a string: the length prefix plus its UTF-8 bytes.
pub fn str_width(s: &str) -> usize {
    crate::STR_PREFIX_WIDTH + s.len()
}

impl Fixed for u8 {
    const WIDTH: usize = 1;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out[0] = self;
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(bytes[0])
    }
}

impl Fixed for bool {
    const WIDTH: usize = 1;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out[0] = self as u8;
    }

    /// Only 0 and 1 are valid stored booleans; anything else means the
    /// pointer is wrong or the byte was overwritten, and is reported
    /// rather than coerced.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        match bytes[0] {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(CodecError::CorruptBool { value }),
        }
    }
}

impl Fixed for u16 {
    const WIDTH: usize = 2;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out.copy_from_slice(&self.to_be_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(u16::from_be_bytes(bytes.try_into().unwrap()))
    }
}

impl Fixed for i16 {
    const WIDTH: usize = 2;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out.copy_from_slice(&self.to_be_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(i16::from_be_bytes(bytes.try_into().unwrap()))
    }
}

impl Fixed for i32 {
    const WIDTH: usize = 4;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out.copy_from_slice(&self.to_be_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(i32::from_be_bytes(bytes.try_into().unwrap()))
    }
}

impl Fixed for i64 {
    const WIDTH: usize = 8;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out.copy_from_slice(&self.to_be_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(i64::from_be_bytes(bytes.try_into().unwrap()))
    }
}

impl Fixed for f32 {
    const WIDTH: usize = 4;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out.copy_from_slice(&self.to_be_bytes());
    }

    /// Bit reinterpretation only; NaN payloads survive unchanged.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(f32::from_be_bytes(bytes.try_into().unwrap()))
    }
}

impl Fixed for f64 {
    const WIDTH: usize = 8;

    fn encode(self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::WIDTH);
        out.copy_from_slice(&self.to_be_bytes());
    }

    /// Bit reinterpretation only; NaN payloads survive unchanged.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        debug_assert_eq!(bytes.len(), Self::WIDTH);
        Ok(f64::from_be_bytes(bytes.try_into().unwrap()))
    }
}
