/// Bit-level writer for the PP20 token stream.
///
/// Bits enter the active byte from the least-significant end and are shifted
/// up as more arrive, so the first bit written lands in the byte's most
/// significant position. The backward [`BitReader`](super::BitReader)
/// consumes the finished stream in the exact reverse order.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Byte currently being filled
    current_byte: u8,
    /// Bits written to the current byte (0-7)
    bits_in_byte: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0 }
    }

    /// Append the low `n` bits of `value`, lowest bit first.
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= 32);

        let mut val = value;
        for _ in 0..n {
            self.current_byte = (self.current_byte << 1) | (val & 1) as u8;
            val >>= 1;
            self.bits_in_byte += 1;

            if self.bits_in_byte == 8 {
                self.output.push(self.current_byte);
                self.current_byte = 0;
                self.bits_in_byte = 0;
            }
        }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u32, 1);
    }

    /// Total bits written so far
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.bits_in_byte as usize
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.bits_in_byte == 0
    }

    /// Finish the stream, padding the last byte with zero bits.
    ///
    /// Returns the packed bytes and the number of padding bits (0-7) the
    /// reader must discard before the first real bit.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let skip = (8 - self.bits_in_byte) % 8;
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte << skip);
        }
        (self.output, skip)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_bit_lands_in_msb() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1, 1);
        writer.write_bits(0, 7);
        let (output, skip) = writer.finish();
        assert_eq!(output, vec![0b1000_0000]);
        assert_eq!(skip, 0);
    }

    #[test]
    fn test_partial_byte_is_left_shifted() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        let (output, skip) = writer.finish();
        // Three bits written LSB-first (1, 0, 1), then shifted past 5 pad bits.
        assert_eq!(output, vec![0b1010_0000]);
        assert_eq!(skip, 5);
    }

    #[test]
    fn test_cross_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFFF, 12);
        let (output, skip) = writer.finish();
        assert_eq!(output, vec![0xFF, 0xF0]);
        assert_eq!(skip, 4);
    }

    #[test]
    fn test_empty_stream_has_no_padding() {
        let (output, skip) = BitWriter::new().finish();
        assert!(output.is_empty());
        assert_eq!(skip, 0);
    }

    #[test]
    fn test_bit_len() {
        let mut writer = BitWriter::new();
        assert!(writer.is_empty());
        writer.write_bits(0, 11);
        assert_eq!(writer.bit_len(), 11);
        assert!(!writer.is_empty());
    }
}
