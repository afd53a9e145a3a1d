use crate::error::{FormatError, Result};

/// Bit-level reader walking a packed stream from its last byte to its first.
///
/// Within each byte bits are extracted least-significant first; values are
/// reassembled by shifting the accumulator left and OR-ing each bit in —
/// the exact inverse of how [`BitWriter`](super::BitWriter) packed them.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index one past the next byte to load, moving toward 0
    pos: usize,
    /// Remaining bits of the byte currently being drained
    current_byte: u8,
    /// Valid bits left in `current_byte` (0-8)
    bits_left: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: data.len(), current_byte: 0, bits_left: 0 }
    }

    /// Read `n` bits (0-32), failing with `Truncated` once the stream head
    /// is passed.
    pub fn read_bits(&mut self, n: u8) -> Result<u32> {
        debug_assert!(n <= 32);

        let mut result = 0u32;
        for _ in 0..n {
            if self.bits_left == 0 {
                if self.pos == 0 {
                    return Err(FormatError::Truncated);
                }
                self.pos -= 1;
                self.current_byte = self.data[self.pos];
                self.bits_left = 8;
            }

            result = (result << 1) | (self.current_byte & 1) as u32;
            self.current_byte >>= 1;
            self.bits_left -= 1;
        }
        Ok(result)
    }

    /// Read a single bit
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Bits not yet consumed (for diagnostics)
    pub fn bits_remaining(&self) -> usize {
        self.pos * 8 + self.bits_left as usize
    }
}
