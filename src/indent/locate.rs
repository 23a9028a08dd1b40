//! Structural locator
//!
//! Backward searches that identify which delimiter governs the line being
//! indented: the last code character of the prefix, the line it sits on,
//! and the single unmatched delimiter (if any) on that line. Delimiter
//! kinds are never distinguished; `(`, `[`, `{` form one opener class and
//! `)`, `]`, `}` one closer class, matched purely by nesting depth.

use crate::indent::classify::CharTag;
use crate::indent::scan::{scan, skip_none, skip_tagged};

/// Whitespace for scanning purposes. Commas separate Clojure elements the
/// same way spaces do.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == ','
}

pub fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

pub fn is_closer(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// A delimiter on the last code line whose counterpart lies outside the
/// line: the line either opens a form that continues past it or closes one
/// opened earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    Opener(usize),
    Closer(usize),
}

/// Index of the last character of the prefix `chars[..end]` that is neither
/// whitespace nor suppressed by a literal tag. `None` for an empty or
/// all-whitespace prefix.
pub fn find_last_code_char(chars: &[char], tags: &[CharTag], end: usize) -> Option<usize> {
    if end == 0 {
        return None;
    }
    scan(chars, end - 1, 0, |i| !is_whitespace(chars[i]), skip_tagged(tags))
}

/// Start index of the line containing `idx`: just past the nearest newline
/// before it, or 0. Line boundaries are lexical, so nothing is skipped.
pub fn line_start_of(chars: &[char], idx: usize) -> usize {
    if idx == 0 {
        return 0;
    }
    match scan(chars, idx - 1, 0, |i| chars[i] == '\n', skip_none()) {
        Some(newline) => newline + 1,
        None => 0,
    }
}

/// Find the single unmatched delimiter between `from` and `line_start`,
/// scanning backward with a nesting depth counter.
///
/// An opener met at depth 0 is immediately the answer. A closer raises the
/// depth, and the one that first raises it from 0 is remembered as the
/// unopened-closer candidate; a later opener that brings the depth back to
/// 0 forgets it again. If the line is exhausted, the remembered candidate
/// (if any) is the answer.
pub fn find_unmatched_in_line(
    chars: &[char],
    tags: &[CharTag],
    from: usize,
    line_start: usize,
) -> Option<Unmatched> {
    let mut depth = 0usize;
    let mut unopened: Option<usize> = None;
    let opener = scan(
        chars,
        from,
        line_start,
        |i| {
            let ch = chars[i];
            if is_closer(ch) {
                depth += 1;
                if depth == 1 {
                    unopened = Some(i);
                }
                false
            } else if is_opener(ch) {
                if depth == 0 {
                    true
                } else {
                    depth -= 1;
                    if depth == 0 {
                        unopened = None;
                    }
                    false
                }
            } else {
                false
            }
        },
        skip_tagged(tags),
    );
    match opener {
        Some(i) => Some(Unmatched::Opener(i)),
        None => unopened.map(Unmatched::Closer),
    }
}

/// Find the opener matching the closer at `closer`, balancing depth across
/// the entire scanned prefix rather than a single line. `None` means the
/// prefix is unbalanced up to this point.
pub fn find_open_delimiter(chars: &[char], tags: &[CharTag], closer: usize) -> Option<usize> {
    if closer == 0 {
        return None;
    }
    let mut depth = 0usize;
    scan(
        chars,
        closer - 1,
        0,
        |i| {
            let ch = chars[i];
            if is_closer(ch) {
                depth += 1;
                false
            } else if is_opener(ch) {
                if depth == 0 {
                    true
                } else {
                    depth -= 1;
                    false
                }
            } else {
                false
            }
        },
        skip_tagged(tags),
    )
}
