use memchr::memmem;

use super::tables::OffsetLengthTable;
use super::LOOKAHEAD_CAPACITY;

/// Find the longest admissible back-reference for the head of `lookahead`
/// inside `window`.
///
/// Candidate lengths are tried longest-first; the first hit wins and shorter
/// matches are never reconsidered. For each length the *rightmost* window
/// occurrence is taken — it has the smallest distance, which is never more
/// expensive to encode within the same length class. A hit is only accepted
/// when its distance fits the class's offset field; otherwise the next
/// shorter length gets a try.
///
/// Returns `(distance, length)` with `distance >= 1`, or `None`, in which
/// case the caller emits a literal. Length-1 matches do not exist in the
/// format.
pub fn find_match(
    lookahead: &[u8],
    window: &[u8],
    table: &OffsetLengthTable,
) -> Option<(u32, usize)> {
    if lookahead.len() < 2 {
        return None;
    }

    let max_len = lookahead.len().min(LOOKAHEAD_CAPACITY);
    for length in (2..=max_len).rev() {
        if let Some(pos) = memmem::rfind(window, &lookahead[..length]) {
            let distance = (window.len() - pos) as u32;
            if distance <= table.max_distance(length) {
                return Some((distance, length));
            }
        }
    }
    None
}
