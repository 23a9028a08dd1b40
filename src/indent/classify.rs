//! Character classification for the indentation engine
//!
//! One forward pass over the prefix tags every character as plain code or
//! as part of a string literal, a line comment, or an escape sequence.
//! Later scans consult these tags so that delimiters inside literals stay
//! structurally inert.

/// Classification tag attached to a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharTag {
    /// Plain code; visible to structural scans.
    Code,
    /// Character following an unescaped backslash.
    Escaped,
    /// Character inside a line comment, including the newline that ends it.
    InComment,
    /// Character inside a string literal, including the opening quote but
    /// not the closing one.
    InString,
}

impl CharTag {
    /// True for characters that must never terminate a structural scan.
    pub fn is_suppressed(self) -> bool {
        !matches!(self, CharTag::Code)
    }
}

/// Result of classifying a prefix: one tag per character plus the state the
/// scanner ended in.
#[derive(Debug, Clone)]
pub struct Classification {
    pub tags: Vec<CharTag>,
    /// The prefix ends inside an unterminated string literal.
    pub open_string: bool,
}

/// Classify every character of the prefix in a single pass.
///
/// The branch order is load-bearing: comment state is checked before escape
/// handling, escapes before string state, and string state before anything
/// that could open a new string or comment. A backslash inside a string
/// still escapes the following quote, and a quote inside a comment opens
/// nothing.
pub fn classify(chars: &[char]) -> Classification {
    let mut tags = Vec::with_capacity(chars.len());
    let mut in_string = false;
    let mut in_comment = false;
    let mut escaped = false;

    for &ch in chars {
        if in_comment {
            tags.push(CharTag::InComment);
            if ch == '\n' {
                in_comment = false;
            }
        } else if escaped {
            tags.push(CharTag::Escaped);
            escaped = false;
        } else if ch == '\\' {
            // The backslash itself stays code so character literals like \(
            // keep a visible lead character; only the next char is inert.
            tags.push(CharTag::Code);
            escaped = true;
        } else if in_string {
            if ch == '"' {
                in_string = false;
                tags.push(CharTag::Code);
            } else {
                tags.push(CharTag::InString);
            }
        } else if ch == '"' {
            in_string = true;
            tags.push(CharTag::InString);
        } else if ch == ';' {
            in_comment = true;
            tags.push(CharTag::InComment);
        } else {
            tags.push(CharTag::Code);
        }
    }

    Classification {
        tags,
        open_string: in_string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(source: &str) -> Vec<CharTag> {
        let chars: Vec<char> = source.chars().collect();
        classify(&chars).tags
    }

    #[test]
    fn test_plain_code_untagged() {
        assert!(tags_of("(foo bar)").iter().all(|t| *t == CharTag::Code));
    }

    #[test]
    fn test_comment_runs_to_newline() {
        let tags = tags_of("x ; c\ny");
        assert_eq!(tags[0], CharTag::Code); // x
        assert_eq!(tags[2], CharTag::InComment); // ;
        assert_eq!(tags[4], CharTag::InComment); // c
        assert_eq!(tags[5], CharTag::InComment); // \n ends the comment
        assert_eq!(tags[6], CharTag::Code); // y
    }

    #[test]
    fn test_string_interior_tagged_closing_quote_is_code() {
        let tags = tags_of("\"ab\" x");
        assert_eq!(tags[0], CharTag::InString); // opening quote
        assert_eq!(tags[1], CharTag::InString);
        assert_eq!(tags[2], CharTag::InString);
        assert_eq!(tags[3], CharTag::Code); // closing quote
        assert_eq!(tags[5], CharTag::Code);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let result = {
            let chars: Vec<char> = "\"a\\\"b".chars().collect();
            classify(&chars)
        };
        // " a \ " b : the inner quote is escaped, the string stays open
        assert_eq!(result.tags[3], CharTag::Escaped);
        assert_eq!(result.tags[4], CharTag::InString);
        assert!(result.open_string);
    }

    #[test]
    fn test_character_literal_backslash_stays_code() {
        let tags = tags_of("\\(");
        assert_eq!(tags[0], CharTag::Code);
        assert_eq!(tags[1], CharTag::Escaped);
    }

    #[test]
    fn test_quote_inside_comment_opens_nothing() {
        let result = {
            let chars: Vec<char> = "; \"\nx".chars().collect();
            classify(&chars)
        };
        assert_eq!(result.tags[2], CharTag::InComment);
        assert_eq!(result.tags[4], CharTag::Code);
        assert!(!result.open_string);
    }

    #[test]
    fn test_semicolon_inside_string_opens_no_comment() {
        let tags = tags_of("\"a;b\" c");
        assert_eq!(tags[2], CharTag::InString);
        assert_eq!(tags[6], CharTag::Code);
    }

    #[test]
    fn test_string_spans_newlines() {
        let result = {
            let chars: Vec<char> = "\"line1\nline2".chars().collect();
            classify(&chars)
        };
        assert_eq!(result.tags[6], CharTag::InString); // the newline
        assert!(result.open_string);
    }

    #[test]
    fn test_empty_input() {
        let result = classify(&[]);
        assert!(result.tags.is_empty());
        assert!(!result.open_string);
    }
}
