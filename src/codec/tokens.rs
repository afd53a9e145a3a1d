/// A single literal/match decision produced while scanning the source.
///
/// Tokens come out of the scan in processing order (source tail toward
/// source head) and are reversed into forward order before bit-encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// One byte emitted as-is
    Literal(u8),
    /// Copy `length` bytes from `offset` positions back in the history.
    /// `offset >= 1`, `length >= 2`; the format has no length-1 match.
    Match { offset: u32, length: usize },
}

impl Token {
    /// Source bytes this token consumes
    pub fn consumed(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length,
        }
    }
}
