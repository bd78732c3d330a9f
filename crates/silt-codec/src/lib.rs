//! Big-endian primitive codec over Silt byte stores.
//!
//! Stateless read/write functions that interpret raw store bytes in place.
//! A single generic entry point per direction dispatches through the
//! [`Fixed`] trait, with thin typed wrappers for each scalar. Reads never
//! touch liveness; writes mark the span they cover and return the next
//! unused pointer so calls chain. No compression, no alignment padding,
//! no self-describing schema — a value is exactly its big-endian bytes.
//!
//! # Format
//!
//! ```text
//! value    width  layout
//! u8       1      the byte itself
//! bool     1      0 = false, 1 = true; anything else is corrupt
//! u16/i16  2      big-endian
//! i32/f32  4      big-endian (f32 as IEEE-754 bits)
//! i64/f64  8      big-endian (f64 as IEEE-754 bits)
//! string   2 + n  u16 length prefix, then n UTF-8 bytes
//! ```
//!
//! Arrays are elements back to back with no count or padding; the caller
//! remembers how many there are.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod value;
pub mod writer;

pub use error::CodecError;
pub use reader::{
    read, read_array, read_bool, read_bytes, read_f32, read_f64, read_i16, read_i32, read_i64,
    read_str, read_u16, read_u8,
};
pub use value::{str_width, width_of, Fixed};
pub use writer::{
    write, write_array, write_bool, write_bytes, write_f32, write_f64, write_i16, write_i32,
    write_i64, write_str, write_u16, write_u8,
};

/// Width of the big-endian length prefix in front of every string.
pub const STR_PREFIX_WIDTH: usize = 2;
