//! The indentation engine
//!
//! This module computes the indentation column for a new line from the text
//! preceding the cursor. The work splits into small pieces:
//! 1. Character classification (code / string / comment / escape) in
//!    [`classify`]
//! 2. The directional scan primitive every search is built on, in [`scan`]
//! 3. Structural searches that find the delimiter governing the cursor's
//!    line, in [`locate`]
//! 4. The body-form symbol set in [`forms`]
//! 5. The indentation rules and the top-level decision in [`rules`]
//!
//! The entry point is [`suggest_indent`]; it is a pure function of the
//! prefix and total over all inputs, including unbalanced text.

pub mod classify;
pub mod forms;
pub mod locate;
pub mod rules;
pub mod scan;

pub use rules::{ends_inside_string, suggest_indent};
