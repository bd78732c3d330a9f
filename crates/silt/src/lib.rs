//! Silt: a fixed-capacity byte store with compaction and a big-endian codec.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Silt sub-crates. For most users, adding `silt` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! // A 32-byte store: every byte free and zeroed.
//! let mut store = Store::new(32).unwrap();
//!
//! // Writes mark the bytes they cover and return the next unused pointer,
//! // so calls chain.
//! let ptr = write_i16(&mut store, 0, -75).unwrap();
//! let ptr = write_str(&mut store, ptr, "ok").unwrap();
//! assert_eq!(ptr, 6);
//!
//! // Reads interpret the bytes in place.
//! assert_eq!(read_i16(&store, 0).unwrap(), -75);
//! assert_eq!(read_str(&store, 2).unwrap(), "ok");
//!
//! // Free the string span; the i16 already sits at the front, so
//! // compaction relocates nothing and a reservation lands right after it.
//! store.free_range(2, 4).unwrap();
//! assert_eq!(store.arrange(0), 0);
//! assert_eq!(store.reserve(8).unwrap(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`store`] | `silt-store` | `Store`, liveness, compaction, reservation, hex dump |
//! | [`codec`] | `silt-codec` | Big-endian value codec: the `Fixed` trait and read/write functions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Byte storage, liveness, and compaction (`silt-store`).
///
/// Most users only need [`store::Store`] from this module — it is also
/// available in the [`prelude`], together with [`store::StoreError`],
/// [`store::StoreStats`], and [`store::HexDump`].
pub use silt_store as store;

/// Big-endian value codec (`silt-codec`).
///
/// Stateless read/write functions over a [`store::Store`], dispatching
/// through the [`codec::Fixed`] trait. The typed wrappers
/// (`read_i16`, `write_str`, ...) are all in the [`prelude`].
pub use silt_codec as codec;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
///
/// This imports the store with its companion types and every typed codec
/// function, which covers the whole read-modify-compact cycle.
pub mod prelude {
    // Store and companions
    pub use silt_store::{HexDump, Store, StoreError, StoreStats};

    // Codec trait and errors
    pub use silt_codec::{CodecError, Fixed};

    // Read side
    pub use silt_codec::{
        read, read_array, read_bool, read_bytes, read_f32, read_f64, read_i16, read_i32, read_i64,
        read_str, read_u16, read_u8,
    };

    // Write side
    pub use silt_codec::{
        write, write_array, write_bool, write_bytes, write_f32, write_f64, write_i16, write_i32,
        write_i64, write_str, write_u16, write_u8,
    };
}
