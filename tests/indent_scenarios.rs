//! Scenario tests for the indentation engine
//!
//! Each case pairs a prefix (all text before the cursor) with the column a
//! fresh line should start at. The table covers the aligned-argument style,
//! the fixed body-form offset, bracket and brace openers, dedent after a
//! closer, manual-indentation preservation, and literal suppression.

use clindent::indent::suggest_indent;
use rstest::rstest;

#[rstest]
#[case::empty("", 0)]
#[case::whitespace_only("   \n\t \n", 0)]
#[case::commas_are_whitespace(" , ,\n", 0)]
#[case::aligns_under_first_argument("(foo bar ", 5)]
#[case::head_alone_indents_one("(foo", 1)]
#[case::threading_aligns_under_argument("(-> x", 4)]
#[case::body_form_with_binding_vector("(defn foo [x]", 2)]
#[case::body_form_let("(let [x 1]", 2)]
#[case::body_form_when("(when (ready?)", 2)]
#[case::body_form_keeps_offset_with_same_line_args("(if (pos? n) :yes", 2)]
#[case::vector_opener_indents_one("[1 2", 1)]
#[case::map_opener_indents_one("{:a 1", 1)]
#[case::indented_map_opener("  {:a 1", 3)]
#[case::vector_inside_call("(foo [a b", 6)]
#[case::nested_open_with_no_element("(foo (", 6)]
#[case::inner_opener_governs("(foo (bar", 6)]
#[case::nested_call_in_body("(defn foo\n  [x]\n  (+ x", 5)]
#[case::open_string_suppresses("(println \"Hello", 0)]
#[case::open_multiline_string_suppresses("(def s \"a\nb", 0)]
#[case::balanced_line_keeps_manual_indent("  (foo)", 2)]
#[case::manual_indent_echoed("(foo\n  bar", 2)]
#[case::later_balanced_line_wins("(a)\n    (b)", 4)]
#[case::close_dedents_to_sibling("(foo\n  (bar\n    baz)", 2)]
#[case::close_dedents_into_alignment("(foo (bar\n baz)", 5)]
#[case::close_dedents_into_body_offset("(let [a 1\n      b 2]", 2)]
#[case::double_close_dedents_to_argument_column("(a (b (c\n x))", 3)]
#[case::double_close_to_top_level("(a (b\n c))", 0)]
#[case::unmatched_closer_falls_back("x))", 0)]
#[case::lone_closer_falls_back(")", 0)]
#[case::string_delimiters_are_inert("(foo \")\" bar ", 5)]
#[case::comment_delimiters_are_inert("(a ; (((\n  b", 2)]
#[case::character_literal_is_inert("(f \\( g", 3)]
#[case::string_can_head_a_list("(f \"a\" ", 3)]
#[case::nested_head_is_one_element("((comp inc dec) x ", 16)]
fn test_suggest_indent(#[case] prefix: &str, #[case] expected: usize) {
    assert_eq!(
        suggest_indent(prefix),
        expected,
        "prefix: {:?}",
        prefix
    );
}

#[test]
fn test_trailing_whitespace_does_not_change_the_decision() {
    assert_eq!(suggest_indent("(defn foo [x]"), suggest_indent("(defn foo [x]  \n  "));
    assert_eq!(suggest_indent("(foo bar "), suggest_indent("(foo bar \n\n   "));
}

#[test]
fn test_unbalanced_literal_content_stays_suppressed() {
    // The string holds three unbalanced closers; the opener still governs
    assert_eq!(suggest_indent("(foo \")))\" "), 5);
    // And an unbalanced opener inside a comment changes nothing
    assert_eq!(suggest_indent("(a)\n; (\n(b)\n  (c)"), 2);
}
