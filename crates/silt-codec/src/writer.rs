//! Encoding values into a store.
//!
//! Every write returns the next unused pointer so calls chain one after
//! another. Writing a span marks it live as a side effect — writing and
//! allocating are the same operation. Spans are validated before anything
//! is written, so a failed write leaves the store untouched.

use silt_store::Store;

use crate::error::CodecError;
use crate::value::Fixed;
use crate::STR_PREFIX_WIDTH;

/// Scratch size covering the widest `Fixed` impl.
const MAX_WIDTH: usize = 8;

// ── Generic entry point ─────────────────────────────────────────

/// Encode `value` at `ptr` and return the next unused pointer.
pub fn write<T: Fixed>(store: &mut Store, ptr: usize, value: T) -> Result<usize, CodecError> {
    debug_assert!(T::WIDTH <= MAX_WIDTH);
    let mut scratch = [0u8; MAX_WIDTH];
    value.encode(&mut scratch[..T::WIDTH]);
    Ok(store.write_slice(ptr, &scratch[..T::WIDTH])?)
}

// ── Typed wrappers ──────────────────────────────────────────────

/// Write a raw byte.
pub fn write_u8(store: &mut Store, ptr: usize, value: u8) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a boolean as a single 0 or 1 byte.
pub fn write_bool(store: &mut Store, ptr: usize, value: bool) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a big-endian u16.
pub fn write_u16(store: &mut Store, ptr: usize, value: u16) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a big-endian i16.
pub fn write_i16(store: &mut Store, ptr: usize, value: i16) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a big-endian i32.
pub fn write_i32(store: &mut Store, ptr: usize, value: i32) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a big-endian i64.
pub fn write_i64(store: &mut Store, ptr: usize, value: i64) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a big-endian f32. Bit copy only.
pub fn write_f32(store: &mut Store, ptr: usize, value: f32) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

/// Write a big-endian f64. Bit copy only.
pub fn write_f64(store: &mut Store, ptr: usize, value: f64) -> Result<usize, CodecError> {
    write(store, ptr, value)
}

// ── Sequences ───────────────────────────────────────────────────

/// Encode `values` back to back starting at `ptr`.
///
/// The whole array is staged and written as one span, so either every
/// element lands or none do.
pub fn write_array<T: Fixed>(
    store: &mut Store,
    ptr: usize,
    values: &[T],
) -> Result<usize, CodecError> {
    let mut buf = vec![0u8; values.len() * T::WIDTH];
    for (i, &value) in values.iter().enumerate() {
        value.encode(&mut buf[i * T::WIDTH..(i + 1) * T::WIDTH]);
    }
    Ok(store.write_slice(ptr, &buf)?)
}

/// Copy raw bytes starting at `ptr`.
pub fn write_bytes(store: &mut Store, ptr: usize, data: &[u8]) -> Result<usize, CodecError> {
    Ok(store.write_slice(ptr, data)?)
}

/// Encode a length-prefixed UTF-8 string starting at `ptr`.
///
/// Returns [`CodecError::StringTooLong`] when the payload does not fit the
/// u16 prefix; nothing is written in that case.
pub fn write_str(store: &mut Store, ptr: usize, s: &str) -> Result<usize, CodecError> {
    if s.len() > u16::MAX as usize {
        return Err(CodecError::StringTooLong { len: s.len() });
    }
    let mut buf = Vec::with_capacity(STR_PREFIX_WIDTH + s.len());
    buf.extend_from_slice(&(s.len() as u16).to_be_bytes());
    buf.extend_from_slice(s.as_bytes());
    Ok(store.write_slice(ptr, &buf)?)
}
