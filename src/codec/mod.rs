//! The PP20 codec core.
//!
//! Container layout (multi-byte integers big-endian):
//!
//! | Offset | Size | Field |
//! |--------|------|----------------------------------|
//! | 0      | 4    | magic `"PP20"`                   |
//! | 4      | 4    | offset-length table, one byte per length class |
//! | 8      | var  | bit-packed token stream          |
//! | end-4  | 3    | original size (24-bit)           |
//! | end-1  | 1    | padding bits in last stream byte |

pub mod decoder;
pub mod encoder;
pub mod finder;
pub mod tables;
pub mod tokens;
pub mod window;

pub use decoder::unpack;
pub use encoder::pack;

/// Magic tag opening every PP20 container
pub const MAGIC: [u8; 4] = *b"PP20";

/// Window profile: log2 of the largest encodable match distance. This is the
/// highest-compression profile of the format family and the only one
/// supported here.
pub const WINDOW_BITS: u8 = 13;

/// Bytes of history the encoder keeps as match sources
pub const WINDOW_CAPACITY: usize = 4096;

/// Longest match the encoder will consider
pub const LOOKAHEAD_CAPACITY: usize = 255;

/// Magic plus offset-length table
pub const HEADER_LEN: usize = 8;

/// 24-bit original size plus skip byte
pub const TRAILER_LEN: usize = 4;

/// Smallest well-formed container: header and trailer around an empty stream
pub const MIN_CONTAINER_LEN: usize = HEADER_LEN + TRAILER_LEN;

/// Largest input the 24-bit size field can describe
pub const MAX_INPUT_LEN: usize = 0xFF_FFFF;
