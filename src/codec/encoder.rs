use crate::bits::BitWriter;

use super::finder::find_match;
use super::tables::OffsetLengthTable;
use super::tokens::Token;
use super::window::{DictionaryWindow, Lookahead};
use super::{MAGIC, MAX_INPUT_LEN};

/// Compress `data` into a fully materialized PP20 container.
///
/// Any input is representable, so packing cannot fail. The one caveat is the
/// container's 24-bit size field: inputs must stay under 16 MiB.
pub fn pack(data: &[u8]) -> Vec<u8> {
    debug_assert!(data.len() <= MAX_INPUT_LEN, "input exceeds the 24-bit size field");

    let table = OffsetLengthTable::default();
    let tokens = tokenize(data, &table);

    let mut writer = BitWriter::with_capacity(data.len() / 2 + 16);
    write_stream(&tokens, &table, &mut writer);
    let (stream, skip) = writer.finish();

    let mut out = Vec::with_capacity(stream.len() + super::MIN_CONTAINER_LEN);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&table.as_bytes());
    out.extend_from_slice(&stream);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes()[1..]);
    out.push(skip);
    out
}

/// Scan the source from its last byte toward its first, producing the token
/// sequence in forward (file) order.
fn tokenize(src: &[u8], table: &OffsetLengthTable) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lookahead = Lookahead::new(src);
    let mut window = DictionaryWindow::new();

    while lookahead.refill() {
        let consumed = match find_match(lookahead.as_slice(), window.as_slice(), table) {
            Some((offset, length)) => {
                tokens.push(Token::Match { offset, length });
                length
            }
            None => {
                tokens.push(Token::Literal(lookahead.as_slice()[0]));
                1
            }
        };
        for byte in lookahead.take(consumed) {
            window.push(byte);
        }
    }

    // Tokens were produced tail-to-head; the bit stream wants forward order.
    tokens.reverse();
    tokens
}

/// Serialize the forward-ordered tokens as alternating literal and match
/// blocks.
///
/// Literal bytes accumulate into a run that is flushed as one block when a
/// match arrives (or the stream ends). A flushed run carries its own 0
/// boundary bit; consecutive match blocks are separated by a 1 bit instead.
/// The window is empty at the first (tail-most) scan step, so the reversed
/// sequence always ends in a literal run — the decoder's first marker bit is
/// therefore always present.
fn write_stream(tokens: &[Token], table: &OffsetLengthTable, writer: &mut BitWriter) {
    let mut verbatim: Vec<u8> = Vec::new();
    let mut boundary_pending = false;

    for token in tokens {
        match *token {
            Token::Literal(byte) => verbatim.push(byte),
            Token::Match { offset, length } => {
                if !verbatim.is_empty() {
                    flush_literals(writer, &mut verbatim);
                    boundary_pending = false;
                }
                if boundary_pending {
                    writer.write_bit(true);
                }
                write_match(writer, table, offset, length);
                boundary_pending = true;
            }
        }
    }

    if !verbatim.is_empty() {
        flush_literals(writer, &mut verbatim);
    }
}

/// Emit a literal block: the raw bytes, the chained 2-bit run length, then
/// the 0 boundary bit.
fn flush_literals(writer: &mut BitWriter, verbatim: &mut Vec<u8>) {
    for &byte in verbatim.iter() {
        writer.write_bits(byte as u32, 8);
    }
    encode_chain(writer, 2, 3, (verbatim.len() - 1) as u32);
    writer.write_bit(false);
    verbatim.clear();
}

/// Emit one back-reference.
///
/// Short matches (length 2-4) get a fixed-width offset for their class plus
/// a 2-bit selector. Longer matches pay a chained 3-bit length extension, a
/// wide offset, a flag bit, and the reserved selector value 3.
fn write_match(writer: &mut BitWriter, table: &OffsetLengthTable, offset: u32, length: usize) {
    if length <= 4 {
        let class = length - 2;
        writer.write_bits(offset - 1, table.width(class));
        writer.write_bits(class as u32, 2);
    } else {
        encode_chain(writer, 3, 7, (length - 5) as u32);
        let width = table.long_offset_width();
        writer.write_bits(offset - 1, width);
        // The decoder picks the short 7-bit offset path when this flag is
        // clear; with the fixed profile (table[3] = 13) it never is.
        writer.write_bit(width != 7);
        writer.write_bits(3, 2);
    }
}

/// Chained variable-length integer: `value` becomes a terminal chunk below
/// `escape`, preceded by as many `escape` chunks as needed. The backward
/// reader sees the escapes first and the terminator last.
fn encode_chain(writer: &mut BitWriter, chunk_bits: u8, escape: u32, value: u32) {
    if value < escape {
        writer.write_bits(value, chunk_bits);
    } else {
        let mut left = value - value % escape;
        writer.write_bits(value % escape, chunk_bits);
        while left > 0 {
            writer.write_bits(escape, chunk_bits);
            left -= escape;
        }
    }
}
