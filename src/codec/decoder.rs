use crate::bits::BitReader;
use crate::error::{FormatError, Result};

use super::tables::OffsetLengthTable;
use super::{HEADER_LEN, MAGIC, MIN_CONTAINER_LEN, TRAILER_LEN};

/// Decompress a PP20 container back into the original bytes.
///
/// The packed stream is walked from its last byte toward its first while the
/// output buffer fills from its last position toward its first, mirroring
/// the encoder's backward scan so match distances line up. All header fields
/// are validated and every decoded distance is bounds-checked; malformed
/// input surfaces as a typed [`FormatError`], never as an out-of-bounds
/// access.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 4 {
        return Err(FormatError::Truncated);
    }
    if data[..4] != MAGIC {
        let mut found = [0u8; 4];
        found.copy_from_slice(&data[..4]);
        return Err(FormatError::BadMagic { found });
    }
    if data.len() < MIN_CONTAINER_LEN {
        return Err(FormatError::Truncated);
    }

    let table = OffsetLengthTable::from_bytes([data[4], data[5], data[6], data[7]])?;

    let trailer = &data[data.len() - TRAILER_LEN..];
    let size = u32::from_be_bytes([0, trailer[0], trailer[1], trailer[2]]) as usize;
    let skip = trailer[3];
    if skip > 7 {
        return Err(FormatError::BadSkip(skip));
    }

    let mut out = vec![0u8; size];
    if size == 0 {
        return Ok(out);
    }

    let stream = &data[HEADER_LEN..data.len() - TRAILER_LEN];
    let mut reader = BitReader::new(stream);
    reader.read_bits(skip)?;

    // Bytes of output still to produce; the write cursor is `remaining - 1`
    // and decoding is done the moment it passes the buffer's start.
    let mut remaining = size;

    'blocks: loop {
        // Marker bit: 0 means a literal run precedes the next match.
        if !reader.read_bit()? {
            let count = 1 + decode_chain(&mut reader, 2, 3)? as usize;
            for _ in 0..count {
                let byte = reader.read_bits(8)? as u8;
                remaining -= 1;
                out[remaining] = byte;
                if remaining == 0 {
                    break 'blocks;
                }
            }
        }

        // A match always follows.
        let selector = reader.read_bits(2)? as usize;
        let (offset, length) = if selector != 3 {
            let offset = reader.read_bits(table.width(selector))? as usize;
            (offset, selector + 2)
        } else {
            let offset = if reader.read_bit()? {
                reader.read_bits(table.width(3))? as usize
            } else {
                reader.read_bits(7)? as usize
            };
            let length = 5 + decode_chain(&mut reader, 3, 7)? as usize;
            (offset, length)
        };

        // The copy source is `offset + 1` positions past the write cursor
        // and must land on bytes already produced.
        if remaining + offset >= size {
            return Err(FormatError::InvalidToken {
                distance: offset + 1,
                available: size - remaining,
            });
        }
        for _ in 0..length {
            out[remaining - 1] = out[remaining + offset];
            remaining -= 1;
            if remaining == 0 {
                break 'blocks;
            }
        }
    }

    Ok(out)
}

/// Chained variable-length integer: sum chunks until one differs from the
/// escape value. Dual of the encoder's `encode_chain`.
fn decode_chain(reader: &mut BitReader<'_>, chunk_bits: u8, escape: u32) -> Result<u64> {
    let mut total = 0u64;
    loop {
        let chunk = reader.read_bits(chunk_bits)?;
        total += chunk as u64;
        if chunk != escape {
            return Ok(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitWriter;
    use crate::codec::pack;

    #[test]
    fn test_round_trip_basics() {
        for src in [&b""[..], b"Q", b"no", b"AAAAAAAAAA", b"ABCABCABCABC", b"hello hello hello"]
        {
            assert_eq!(unpack(&pack(src)).unwrap(), src, "source {:?}", src);
        }
    }

    #[test]
    fn test_bad_magic() {
        assert_eq!(
            unpack(b"PX20aaaaaaaa"),
            Err(FormatError::BadMagic { found: *b"PX20" })
        );
    }

    #[test]
    fn test_short_input_is_truncated() {
        assert_eq!(unpack(b""), Err(FormatError::Truncated));
        assert_eq!(unpack(b"PP"), Err(FormatError::Truncated));
        assert_eq!(unpack(b"PP20\x09\x0a"), Err(FormatError::Truncated));
    }

    #[test]
    fn test_bad_table_width() {
        let mut packed = pack(b"abc");
        packed[5] = 0;
        assert_eq!(unpack(&packed), Err(FormatError::BadTable { width: 0 }));
    }

    #[test]
    fn test_bad_skip_count() {
        let mut packed = pack(b"abc");
        let n = packed.len();
        packed[n - 1] = 8;
        assert_eq!(unpack(&packed), Err(FormatError::BadSkip(8)));
    }

    #[test]
    fn test_empty_payload_decodes_without_stream() {
        let container = b"PP20\x09\x0a\x0c\x0d\x00\x00\x00\x00";
        assert_eq!(unpack(container).unwrap(), b"");
    }

    #[test]
    fn test_truncated_stream() {
        // Claims four bytes of payload but carries no stream bits at all.
        let container = b"PP20\x09\x0a\x0c\x0d\x00\x00\x04\x00";
        assert_eq!(unpack(container), Err(FormatError::Truncated));
    }

    #[test]
    fn test_match_before_any_output_is_invalid() {
        // Hand-build a stream whose first decoded block is a match: the
        // decoder reads marker 1, selector 0, then a 9-bit offset. Written
        // in reverse: offset, selector, marker.
        let mut w = BitWriter::new();
        w.write_bits(40, 9);
        w.write_bits(0, 2);
        w.write_bits(1, 1);
        let (stream, skip) = w.finish();

        let mut container = b"PP20\x09\x0a\x0c\x0d".to_vec();
        container.extend_from_slice(&stream);
        container.extend_from_slice(&[0, 0, 4, skip]);

        assert_eq!(
            unpack(&container),
            Err(FormatError::InvalidToken { distance: 41, available: 0 })
        );
    }

    #[test]
    fn test_decode_chain_sums_escapes() {
        // Chunks 3, 3, 1 under escape 3 mean 7. Written in reverse so the
        // backward reader sees the escapes first.
        let mut w = BitWriter::new();
        w.write_bits(1, 2);
        w.write_bits(3, 2);
        w.write_bits(3, 2);
        let (stream, skip) = w.finish();
        let mut r = BitReader::new(&stream);
        r.read_bits(skip).unwrap();
        assert_eq!(decode_chain(&mut r, 2, 3).unwrap(), 7);
    }
}
