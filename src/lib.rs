//! Lossless compression in the PowerPacker "PP20" container format.
//!
//! PP20 is an LZ-style codec designed so decompression can run in place on a
//! memory-constrained machine: the packed stream is read from its last byte
//! toward its first, and the output buffer is filled from its last position
//! toward its first. Both halves of this crate keep that backward orientation
//! explicit — the encoder consumes the source tail-first, and the decoder is
//! its exact mirror.
//!
//! The container is fully materialized: [`pack`] turns a byte slice into a
//! self-describing packed vector, and [`unpack`] reverses it. File handling
//! belongs to the caller (or the bundled `pp20` binary).
//!
//! ```
//! let packed = pp20::pack(b"ABCABCABCABC");
//! assert_eq!(pp20::unpack(&packed).unwrap(), b"ABCABCABCABC");
//! ```

pub mod bits;
pub mod codec;
pub mod error;

pub use codec::tables::OffsetLengthTable;
pub use codec::tokens::Token;
pub use codec::{pack, unpack};
pub use error::{FormatError, Result};
