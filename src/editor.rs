//! Editor-facing surface
//!
//! The core engine only ever sees "the text before the cursor". This module
//! bridges a host editor's document to that contract: [`adapter`] validates
//! a cursor, slices the prefix, and materializes the computed column as
//! concrete text edits; [`reindent`] is the batch analogue that rebuilds a
//! whole document with the engine's suggestions.
//!
//! Wiring [`adapter::newline_edit`] into a host's indentation-service
//! extension point is the host's concern and stays outside this crate.

pub mod adapter;
pub mod reindent;

pub use adapter::{indentation_at, newline_edit, AdapterError, TextEditSpan};
pub use reindent::reindent;
