use crate::error::{FormatError, Result};

use super::WINDOW_BITS;

/// Per-length-class offset widths, derived from the window profile.
///
/// Class `c` covers matches of length `c + 2`; class 3 covers every length
/// of 5 or more. Longer matches are worth wider offsets, so the widths grow
/// with the class. The table is persisted verbatim in the container header,
/// so a decoder never recomputes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetLengthTable {
    widths: [u8; 4],
}

impl OffsetLengthTable {
    /// Derive the table for a window of `2^window_bits` bytes.
    pub fn from_window_bits(window_bits: u8) -> Self {
        Self {
            widths: [window_bits - 4, window_bits - 3, window_bits - 1, window_bits],
        }
    }

    /// Reconstruct the table from header bytes 4-7, rejecting widths a
    /// sane profile cannot produce.
    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self> {
        for &width in &bytes {
            if width == 0 || width > 16 {
                return Err(FormatError::BadTable { width });
            }
        }
        Ok(Self { widths: bytes })
    }

    /// Header representation, one byte per class
    pub fn as_bytes(&self) -> [u8; 4] {
        self.widths
    }

    /// Offset width in bits for a length class (0-3)
    #[inline]
    pub fn width(&self, class: usize) -> u8 {
        self.widths[class]
    }

    /// Offset width used by extended (length >= 5) matches
    #[inline]
    pub fn long_offset_width(&self) -> u8 {
        self.widths[3].max(7)
    }

    /// Largest distance encodable for a match of `length` bytes
    pub fn max_distance(&self, length: usize) -> u32 {
        debug_assert!(length >= 2);
        if length > 4 {
            1 << self.long_offset_width()
        } else {
            1 << self.widths[length - 2]
        }
    }
}

impl Default for OffsetLengthTable {
    fn default() -> Self {
        Self::from_window_bits(WINDOW_BITS)
    }
}
