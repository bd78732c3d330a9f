//! Decoding values from a store.
//!
//! Stateless functions: every call names the store and a pointer. Reads
//! never touch liveness and never mutate the store. All access is
//! bounds-checked through the store, so a read past the end is a reported
//! error, not a panic.

use silt_store::Store;

use crate::error::CodecError;
use crate::value::Fixed;
use crate::STR_PREFIX_WIDTH;

// ── Generic entry point ─────────────────────────────────────────

/// Decode a `T` from `[ptr, ptr + T::WIDTH)`.
pub fn read<T: Fixed>(store: &Store, ptr: usize) -> Result<T, CodecError> {
    let bytes = store.slice(ptr, T::WIDTH)?;
    T::decode(bytes)
}

// ── Typed wrappers ──────────────────────────────────────────────

/// Read a raw byte (0–255).
pub fn read_u8(store: &Store, ptr: usize) -> Result<u8, CodecError> {
    read(store, ptr)
}

/// Read a boolean; the stored byte must be 0 or 1.
pub fn read_bool(store: &Store, ptr: usize) -> Result<bool, CodecError> {
    read(store, ptr)
}

/// Read a big-endian u16, the 2-byte unsigned code-unit type.
pub fn read_u16(store: &Store, ptr: usize) -> Result<u16, CodecError> {
    read(store, ptr)
}

/// Read a big-endian i16.
pub fn read_i16(store: &Store, ptr: usize) -> Result<i16, CodecError> {
    read(store, ptr)
}

/// Read a big-endian i32.
pub fn read_i32(store: &Store, ptr: usize) -> Result<i32, CodecError> {
    read(store, ptr)
}

/// Read a big-endian i64.
pub fn read_i64(store: &Store, ptr: usize) -> Result<i64, CodecError> {
    read(store, ptr)
}

/// Read a big-endian f32. Bit reinterpretation only.
pub fn read_f32(store: &Store, ptr: usize) -> Result<f32, CodecError> {
    read(store, ptr)
}

/// Read a big-endian f64. Bit reinterpretation only.
pub fn read_f64(store: &Store, ptr: usize) -> Result<f64, CodecError> {
    read(store, ptr)
}

// ── Sequences ───────────────────────────────────────────────────

/// Decode `count` consecutive `T`s starting at `ptr`.
pub fn read_array<T: Fixed>(
    store: &Store,
    ptr: usize,
    count: usize,
) -> Result<Vec<T>, CodecError> {
    let mut values = Vec::with_capacity(count);
    let mut at = ptr;
    for _ in 0..count {
        values.push(read::<T>(store, at)?);
        at += T::WIDTH;
    }
    Ok(values)
}

/// Copy `len` raw bytes starting at `ptr`.
pub fn read_bytes(store: &Store, ptr: usize, len: usize) -> Result<Vec<u8>, CodecError> {
    Ok(store.slice(ptr, len)?.to_vec())
}

/// Decode a length-prefixed UTF-8 string starting at `ptr`.
///
/// The prefix is read as an unsigned magnitude, so payloads longer than
/// 32767 bytes decode correctly.
pub fn read_str(store: &Store, ptr: usize) -> Result<String, CodecError> {
    let len = read_u16(store, ptr)? as usize;
    let bytes = store.slice(ptr + STR_PREFIX_WIDTH, len)?;
    Ok(std::str::from_utf8(bytes)?.to_owned())
}
