//! Host editor adapter
//!
//! Slices the text preceding the cursor out of a live document, runs the
//! engine, and materializes the returned column count as literal space
//! characters. Edits are expressed as byte offsets over the original
//! document so hosts can apply them without re-deriving positions.

use crate::indent::suggest_indent;
use serde::Serialize;
use std::fmt;

/// Text edit expressed as byte offsets over the original document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEditSpan {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

/// Error type for cursor validation. The engine itself is total; only the
/// document/cursor pairing can be invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Cursor lies beyond the end of the document.
    OutOfBounds { cursor: usize, len: usize },
    /// Cursor does not sit on a character boundary.
    NotCharBoundary(usize),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::OutOfBounds { cursor, len } => {
                write!(f, "Cursor {} beyond document end {}", cursor, len)
            }
            AdapterError::NotCharBoundary(cursor) => {
                write!(f, "Cursor {} is not a character boundary", cursor)
            }
        }
    }
}

impl std::error::Error for AdapterError {}

/// The indentation, as literal spaces, for a line break at `cursor`.
pub fn indentation_at(source: &str, cursor: usize) -> Result<String, AdapterError> {
    let prefix = prefix_before(source, cursor)?;
    Ok(" ".repeat(suggest_indent(prefix)))
}

/// The edit a host applies when Enter is pressed at `cursor`: a newline
/// plus the computed indentation, inserted in place.
pub fn newline_edit(source: &str, cursor: usize) -> Result<TextEditSpan, AdapterError> {
    let indentation = indentation_at(source, cursor)?;
    Ok(TextEditSpan {
        start: cursor,
        end: cursor,
        new_text: format!("\n{}", indentation),
    })
}

fn prefix_before(source: &str, cursor: usize) -> Result<&str, AdapterError> {
    if cursor > source.len() {
        return Err(AdapterError::OutOfBounds {
            cursor,
            len: source.len(),
        });
    }
    if !source.is_char_boundary(cursor) {
        return Err(AdapterError::NotCharBoundary(cursor));
    }
    Ok(&source[..cursor])
}
