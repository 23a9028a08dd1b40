//! Indentation rules
//!
//! Ties the classifier, scanner, and locator together: given the text that
//! precedes the cursor, decide the column a fresh line should start at.
//!
//! The decision runs top-down:
//! 1. A prefix ending inside a string literal suggests nothing (column 0)
//! 2. An unmatched opener on the last code line picks between aligned
//!    first-argument style, the fixed body-form offset, and the one-column
//!    default
//! 3. An unmatched closer dedents to the column a sibling of the closed
//!    form would receive, re-derived from the matching opener's position
//! 4. Anything else echoes the last code line's own indentation

use crate::indent::classify::{classify, CharTag};
use crate::indent::forms::is_body_form;
use crate::indent::locate::{
    find_last_code_char, find_open_delimiter, find_unmatched_in_line, is_closer, is_opener,
    is_whitespace, line_start_of, Unmatched,
};
use crate::indent::scan::{scan, skip_comments, skip_none, skip_tagged};

/// Compute the indentation column for a new line inserted after `prefix`.
///
/// Pure and total: the same prefix always yields the same column, and
/// malformed or unbalanced text degrades to echoing the previous line's
/// indentation rather than failing.
pub fn suggest_indent(prefix: &str) -> usize {
    let chars: Vec<char> = prefix.chars().collect();
    let classification = classify(&chars);
    if classification.open_string {
        // Mid-string, a line break is string content; never reindent it.
        return 0;
    }
    indent_before(&chars, &classification.tags, chars.len())
}

/// True when `prefix` ends inside an unterminated string literal. Hosts use
/// this to suppress electric indentation while the user types a string.
pub fn ends_inside_string(prefix: &str) -> bool {
    let chars: Vec<char> = prefix.chars().collect();
    classify(&chars).open_string
}

/// Indentation decision for the prefix `chars[..end]`.
fn indent_before(chars: &[char], tags: &[CharTag], end: usize) -> usize {
    let last = match find_last_code_char(chars, tags, end) {
        Some(i) => i,
        None => return 0,
    };
    let line_start = line_start_of(chars, last);
    match find_unmatched_in_line(chars, tags, last, line_start) {
        Some(Unmatched::Opener(open)) => form_indent(chars, tags, open, end),
        Some(Unmatched::Closer(close)) => closing_indent(chars, tags, close)
            .unwrap_or_else(|| leading_whitespace(chars, line_start, end)),
        None => leading_whitespace(chars, line_start, end),
    }
}

/// Column of the first non-whitespace character on the line starting at
/// `line_start`: the indentation the line was manually given.
fn leading_whitespace(chars: &[char], line_start: usize, end: usize) -> usize {
    if line_start >= end {
        return 0;
    }
    match scan(chars, line_start, end - 1, |i| !is_whitespace(chars[i]), skip_none()) {
        Some(i) => i - line_start,
        None => 0,
    }
}

/// Decide the column for content nested under the unmatched opener at
/// `open`, with all forward scans bounded by `end`.
///
/// Only a `(` consults its first element: a body-form symbol fixes the
/// offset at two columns, and otherwise a first argument on the opener's
/// own line sets the column for its siblings. `[` and `{`, or a `(` whose
/// argument starts on a later line, indent one past the opener.
fn form_indent(chars: &[char], tags: &[CharTag], open: usize, end: usize) -> usize {
    let line_start = line_start_of(chars, open);
    let open_col = open - line_start;

    if chars[open] != '(' || open + 1 >= end {
        return open_col + 1;
    }

    // Operator position. Comments are invisible here, strings are not; a
    // string literal can head a list.
    let head = match scan(chars, open + 1, end - 1, |i| !is_whitespace(chars[i]), skip_comments(tags))
    {
        Some(i) => i,
        None => return open_col + 1,
    };

    // Read the whole element, balancing nested delimiters, so a form in
    // operator position counts as one element. Delimiters inside literals
    // are already invisible to the depth counter.
    let mut depth = 0i32;
    let head_end = scan(
        chars,
        head,
        end - 1,
        |i| {
            let ch = chars[i];
            if is_opener(ch) {
                depth += 1;
                false
            } else if is_closer(ch) {
                depth -= 1;
                false
            } else {
                depth <= 0 && is_whitespace(ch)
            }
        },
        skip_tagged(tags),
    );

    let head_stop = match head_end {
        Some(i) => i,
        None => {
            // The element runs to the end of the prefix; it may still name
            // a body form ("(defn" and Enter).
            let symbol: String = chars[head..end].iter().collect();
            return if is_body_form(&symbol) { open_col + 2 } else { open_col + 1 };
        }
    };

    let symbol: String = chars[head..head_stop].iter().collect();
    if is_body_form(&symbol) {
        return open_col + 2;
    }

    // Aligned style applies only when the first argument sits on the
    // opener's own line.
    let arg = scan(chars, head_stop, end - 1, |i| !is_whitespace(chars[i]), skip_comments(tags));
    match arg {
        Some(a) if line_start_of(chars, a) == line_start => a - line_start,
        _ => open_col + 1,
    }
}

/// Dedent: the indentation for a line following the form closed by the
/// unmatched closer at `close`. `None` when the prefix holds no matching
/// opener; the caller falls back to plain line indentation.
fn closing_indent(chars: &[char], tags: &[CharTag], close: usize) -> Option<usize> {
    let open = find_open_delimiter(chars, tags, close)?;
    Some(indent_at_open(chars, tags, open))
}

/// Indentation as if the prefix ended immediately after the opener at
/// `open`: the column a sibling of that form would receive.
///
/// The opener's own line position decides: an unmatched delimiter earlier
/// on its line hands the decision to the usual rules (with forward scans
/// bounded at the opener), and otherwise the line's manual indentation
/// stands.
fn indent_at_open(chars: &[char], tags: &[CharTag], open: usize) -> usize {
    let line_start = line_start_of(chars, open);
    if open == line_start {
        return 0;
    }
    match find_unmatched_in_line(chars, tags, open - 1, line_start) {
        Some(Unmatched::Opener(outer)) => form_indent(chars, tags, outer, open + 1),
        Some(Unmatched::Closer(close)) => closing_indent(chars, tags, close)
            .unwrap_or_else(|| leading_whitespace(chars, line_start, open + 1)),
        None => leading_whitespace(chars, line_start, open + 1),
    }
}
