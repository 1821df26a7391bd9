//! Lexical predicates over a single normalized line
//!
//! Each predicate inspects at most four byte positions: the first and last
//! byte, the second-to-last byte, and the byte after the leading `<`. The
//! three tag predicates are mutually exclusive by construction; each checks a
//! distinct combination of trailing slash and leading-letter case, so
//! evaluation order never changes the outcome.

use crate::jsx_lex::constants::{first_letter_is_uppercase, CLOSE_ANGLE_BRACKET, FORWARD_SLASH, OPEN_ANGLE_BRACKET};

/// The line is bracketed, at least `<>`, and ends with the closing bracket.
fn is_bracketed(bytes: &[u8]) -> bool {
    bytes.len() >= 2
        && bytes[0] == OPEN_ANGLE_BRACKET as u8
        && bytes[bytes.len() - 1] == CLOSE_ANGLE_BRACKET as u8
}

/// The byte before the closing bracket is a slash.
fn ends_with_slash_bracket(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[bytes.len() - 2] == FORWARD_SLASH as u8
}

/// An HTML open or close tag: bracketed, not self-closing, lowercase name.
///
/// `<div>` and `</div>` both satisfy this predicate; the classifier
/// distinguishes the two by the leading slash when it builds the token.
pub fn is_html_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    is_bracketed(bytes) && !ends_with_slash_bracket(bytes) && !first_letter_is_uppercase(line)
}

/// A self-closing HTML tag: bracketed, `/>` ending, lowercase name.
pub fn is_self_closing_html_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    is_bracketed(bytes) && ends_with_slash_bracket(bytes) && !first_letter_is_uppercase(line)
}

/// A component tag: a self-closing tag whose name starts with an uppercase
/// letter.
pub fn is_component_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    is_bracketed(bytes) && ends_with_slash_bracket(bytes) && first_letter_is_uppercase(line)
}

/// The catch-all: anything no tag predicate claims.
///
/// Note that a capitalized tag without the `/>` ending (`<Foo>`) lands here;
/// the dialect only recognizes components in self-closing form.
pub fn is_text_node(line: &str) -> bool {
    !is_html_tag(line) && !is_self_closing_html_tag(line) && !is_component_tag(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tag() {
        assert!(is_html_tag("<div>"));
        assert!(is_html_tag("</div>"));
        assert!(is_html_tag("<button id=\"my_btn\">"));
        assert!(!is_html_tag("<img/>"));
        assert!(!is_html_tag("<HelloWorld/>"));
        assert!(!is_html_tag("salam"));
    }

    #[test]
    fn test_self_closing_html_tag() {
        assert!(is_self_closing_html_tag("<img/>"));
        assert!(is_self_closing_html_tag("<input type=\"text\"/>"));
        assert!(!is_self_closing_html_tag("<div>"));
        assert!(!is_self_closing_html_tag("<HelloWorld/>"));
        assert!(!is_self_closing_html_tag("img/"));
    }

    #[test]
    fn test_component_tag() {
        assert!(is_component_tag("<HelloWorld/>"));
        assert!(is_component_tag("<App/>"));
        assert!(!is_component_tag("<helloWorld/>"));
        assert!(!is_component_tag("<img/>"));
        assert!(!is_component_tag("<HelloWorld>"));
    }

    #[test]
    fn test_text_node() {
        assert!(is_text_node("salam"));
        assert!(is_text_node("hello world"));
        // Capitalized but not self-closing: no tag predicate claims it.
        assert!(is_text_node("<HelloWorld>"));
        assert!(!is_text_node("<div>"));
        assert!(!is_text_node("<img/>"));
        assert!(!is_text_node("<HelloWorld/>"));
    }

    #[test]
    fn test_degenerate_lines() {
        // "<>" is lexically a tag: bracketed, no slash, no uppercase letter.
        assert!(is_html_tag("<>"));
        assert!(is_text_node("<"));
        assert!(is_text_node(">"));
        assert!(is_text_node(""));
    }

    #[test]
    fn test_mutual_exclusion() {
        for line in ["<div>", "</div>", "<img/>", "<HelloWorld/>", "salam", ""] {
            let claims = [
                is_html_tag(line),
                is_self_closing_html_tag(line),
                is_component_tag(line),
            ]
            .iter()
            .filter(|&&c| c)
            .count();
            assert!(claims <= 1, "more than one tag predicate claimed {:?}", line);
            assert_eq!(is_text_node(line), claims == 0);
        }
    }
}
