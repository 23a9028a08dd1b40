//! Property-based tests for the indentation engine
//!
//! The engine must be total over arbitrary prefixes, quiet over blank
//! input, and stable: accepting its own suggestion and asking again yields
//! the same column.

use clindent::indent::suggest_indent;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_total_over_arbitrary_input(prefix in "[ -~\\t\\n]{0,200}") {
        // Includes unbalanced delimiters, stray escapes, and unterminated
        // literals; the engine must answer for all of them.
        let _ = suggest_indent(&prefix);
    }

    #[test]
    fn test_whitespace_only_suggests_zero(prefix in "[ \\t\\n,]{0,64}") {
        prop_assert_eq!(suggest_indent(&prefix), 0);
    }

    #[test]
    fn test_suggestion_is_stable(prefix in "[ -~\\n]{0,120}") {
        let column = suggest_indent(&prefix);
        let extended = format!("{}\n{}", prefix, " ".repeat(column));
        prop_assert_eq!(suggest_indent(&extended), column, "prefix: {:?}", prefix);
    }
}
