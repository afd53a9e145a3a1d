use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a PowerPacker stream: expected \"PP20\" magic, found {found:02x?}")]
    BadMagic { found: [u8; 4] },

    #[error("compressed stream ended before the output was complete")]
    Truncated,

    #[error("offset width {width} in the stream header is out of range (1-16)")]
    BadTable { width: u8 },

    #[error("skip count {0} exceeds the 7 padding bits a byte can hold")]
    BadSkip(u8),

    #[error("back-reference distance {distance} exceeds the {available} bytes already decoded")]
    InvalidToken { distance: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, FormatError>;
