//! Directional scan primitive
//!
//! Every structural search in the engine is built on [`scan`]: a bounded
//! walk over the classified prefix that ignores characters the skip
//! predicate rejects and stops at the first character the match predicate
//! accepts. Searches differ only in their bounds and predicates, never in
//! their loop.

use crate::indent::classify::CharTag;

/// Scan between `start` and `limit` (both inclusive) for the first index
/// whose character is not skipped and satisfies the match predicate.
///
/// Direction is implied by the bounds: `start <= limit` walks forward,
/// `start > limit` walks backward. Returns `None` when the range is
/// exhausted without a match. Both predicates receive the candidate index;
/// they may carry state (the structural locator's depth counters do).
pub fn scan<M, S>(chars: &[char], start: usize, limit: usize, mut matches: M, mut skip: S) -> Option<usize>
where
    M: FnMut(usize) -> bool,
    S: FnMut(usize) -> bool,
{
    if chars.is_empty() {
        return None;
    }
    debug_assert!(start < chars.len() && limit < chars.len());
    let forward = start <= limit;
    let mut i = start;
    loop {
        if !skip(i) && matches(i) {
            return Some(i);
        }
        if forward {
            if i >= limit {
                break;
            }
            i += 1;
        } else {
            if i <= limit {
                break;
            }
            i -= 1;
        }
    }
    None
}

/// Default skip predicate: characters carrying a string, comment, or escape
/// tag are invisible to structural scans.
pub fn skip_tagged(tags: &[CharTag]) -> impl FnMut(usize) -> bool + '_ {
    |i| tags[i].is_suppressed()
}

/// Skip comment interiors only. Forward element scans use this: a string
/// literal is itself a valid element, so its characters must stay visible.
pub fn skip_comments(tags: &[CharTag]) -> impl FnMut(usize) -> bool + '_ {
    |i| matches!(tags[i], CharTag::InComment)
}

/// Skip nothing. Lexical scans (line boundaries, leading whitespace) see
/// every character.
pub fn skip_none() -> impl FnMut(usize) -> bool {
    |_| false
}
