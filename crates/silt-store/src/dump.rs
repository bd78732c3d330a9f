//! Hex rendering of store contents.
//!
//! Purely observational: the dump walks the raw bytes in pointer order and
//! never consults or changes liveness.

use std::fmt;

use crate::store::Store;

/// Display adapter rendering store bytes as `0xNN` tokens.
///
/// One token per byte in pointer order, space separated, with a line break
/// after every `line_width` tokens; a `line_width` of zero renders a single
/// line. There is no trailing space or newline.
pub struct HexDump<'a> {
    bytes: &'a [u8],
    line_width: usize,
}

impl Store {
    /// Render the whole store as hex tokens, `line_width` bytes per line.
    ///
    /// ```
    /// use silt_store::Store;
    ///
    /// let mut store = Store::new(16).unwrap();
    /// store.poke(0, 0xAB).unwrap();
    /// let dump = store.hex_dump(8).to_string();
    /// assert!(dump.starts_with("0xab 0x00"));
    /// assert_eq!(dump.lines().count(), 2);
    /// ```
    pub fn hex_dump(&self, line_width: usize) -> HexDump<'_> {
        HexDump {
            bytes: &self.bytes,
            line_width,
        }
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                if self.line_width > 0 && i % self.line_width == 0 {
                    f.write_str("\n")?;
                } else {
                    f.write_str(" ")?;
                }
            }
            write!(f, "0x{byte:02x}")?;
        }
        Ok(())
    }
}
