//! # clindent
//!
//! An indentation engine for Clojure source. Given all of the text that
//! precedes the cursor, [`indent::suggest_indent`] returns the number of
//! space columns a fresh line should start with.
//!
//! The engine is a character-level scanner, not a parser: one pass
//! classifies the prefix into code, string, and comment regions, and a
//! handful of bounded scans over that classification locate the delimiter
//! that governs the cursor's line. The [`editor`] module turns the computed
//! column into concrete edits a host editor can apply.

pub mod editor;
pub mod indent;
