//! Whole-document re-indentation
//!
//! The batch analogue of the per-keystroke engine: rebuild the document
//! line by line, giving every line after the first the indentation the
//! engine suggests over the already-rebuilt prefix. String interiors are
//! content, not layout, and pass through untouched.

use crate::indent::{ends_inside_string, suggest_indent};

/// Re-indent `source`, returning the rebuilt document.
///
/// The first line keeps its text as written; every following line is
/// stripped of its leading spaces and tabs and re-indented to the engine's
/// suggestion. A line whose preceding text ends inside a string literal is
/// emitted verbatim, and a line with no content is emitted empty.
pub fn reindent(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (index, line) in source.split('\n').enumerate() {
        if index == 0 {
            out.push_str(line);
            continue;
        }
        out.push('\n');
        if ends_inside_string(&out) {
            out.push_str(line);
            continue;
        }
        let content = line.trim_start_matches(|c| c == ' ' || c == '\t');
        if content.is_empty() {
            continue;
        }
        let column = suggest_indent(&out);
        for _ in 0..column {
            out.push(' ');
        }
        out.push_str(content);
    }
    out
}
