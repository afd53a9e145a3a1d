//! Mirrored bit-level I/O for the PP20 stream.
//!
//! The writer appends bits front-to-back; the reader extracts them back-to-
//! front, starting at the last stream byte. Within a byte the writer shifts
//! new bits in from the bottom, so the reader, pulling the low bit first,
//! sees the exact reverse of the emission order.

pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;
