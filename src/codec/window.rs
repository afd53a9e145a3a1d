//! Bounded buffers for the backward source scan.
//!
//! Both buffers hold bytes in processing order: the encoder consumes the
//! source from its last byte toward its first, so "history" here means bytes
//! that sit *after* the current position in the original file, and index 0
//! of the lookahead is the next byte to be processed.

use std::collections::VecDeque;

use super::{LOOKAHEAD_CAPACITY, WINDOW_CAPACITY};

/// The most recently processed bytes, capped at [`WINDOW_CAPACITY`] with the
/// oldest end evicted first. Match distances are measured from the newest
/// end: distance 1 is the last byte pushed.
pub struct DictionaryWindow {
    buf: VecDeque<u8>,
}

impl DictionaryWindow {
    pub fn new() -> Self {
        Self { buf: VecDeque::with_capacity(WINDOW_CAPACITY) }
    }

    /// Append a processed byte, evicting from the old end when full
    pub fn push(&mut self, byte: u8) {
        if self.buf.len() == WINDOW_CAPACITY {
            self.buf.pop_front();
        }
        self.buf.push_back(byte);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Contiguous view of the window for match searching
    pub fn as_slice(&mut self) -> &[u8] {
        self.buf.make_contiguous()
    }
}

impl Default for DictionaryWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Up to [`LOOKAHEAD_CAPACITY`] unconsumed source bytes, refilled from the
/// source's unread tail. The cursor counts down; the scan is over when it
/// passes the first byte and the buffer drains.
pub struct Lookahead<'a> {
    src: &'a [u8],
    /// Source bytes not yet pulled into the buffer; the next one in is
    /// `src[unread - 1]`
    unread: usize,
    buf: VecDeque<u8>,
}

impl<'a> Lookahead<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, unread: src.len(), buf: VecDeque::with_capacity(LOOKAHEAD_CAPACITY) }
    }

    /// Top the buffer up to capacity. Returns false once the source is
    /// exhausted and the buffer empty.
    pub fn refill(&mut self) -> bool {
        while self.buf.len() < LOOKAHEAD_CAPACITY && self.unread > 0 {
            self.unread -= 1;
            self.buf.push_back(self.src[self.unread]);
        }
        !self.buf.is_empty()
    }

    /// Contiguous view of the buffered bytes
    pub fn as_slice(&mut self) -> &[u8] {
        self.buf.make_contiguous()
    }

    /// Consume the front `n` buffered bytes
    pub fn take(&mut self, n: usize) -> impl Iterator<Item = u8> + '_ {
        self.buf.drain(..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_evicts_oldest() {
        let mut window = DictionaryWindow::new();
        for i in 0..WINDOW_CAPACITY + 10 {
            window.push((i & 0xFF) as u8);
        }
        assert_eq!(window.len(), WINDOW_CAPACITY);
        // The first ten pushes are gone.
        assert_eq!(window.as_slice()[0], 10);
    }

    #[test]
    fn test_lookahead_reverses_source_tail() {
        let mut la = Lookahead::new(b"abcde");
        assert!(la.refill());
        assert_eq!(la.as_slice(), b"edcba");
    }

    #[test]
    fn test_lookahead_caps_at_capacity_and_refills() {
        let src: Vec<u8> = (0..300u32).map(|i| (i & 0xFF) as u8).collect();
        let mut la = Lookahead::new(&src);
        assert!(la.refill());
        assert_eq!(la.as_slice().len(), LOOKAHEAD_CAPACITY);
        // First buffered byte is the source's last byte.
        assert_eq!(la.as_slice()[0], (299u32 & 0xFF) as u8);

        let taken: Vec<u8> = la.take(200).collect();
        assert_eq!(taken.len(), 200);
        assert!(la.refill());
        assert_eq!(la.as_slice().len(), 100);
    }

    #[test]
    fn test_lookahead_drains_to_empty() {
        let mut la = Lookahead::new(b"xy");
        assert!(la.refill());
        let _ = la.take(2).count();
        assert!(!la.refill());
    }
}
