//! Shared lexical constants for the markup dialect
//!
//! Both the normalizer and the classifier key off the same two delimiter
//! characters. They are defined once here, as immutable values, so the two
//! stages can never disagree about what opens or closes a tag.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opens a tag construct.
pub const OPEN_ANGLE_BRACKET: char = '<';

/// Closes a tag construct.
pub const CLOSE_ANGLE_BRACKET: char = '>';

/// Marks a self-closing tag when it appears directly before the closing bracket.
pub const FORWARD_SLASH: char = '/';

/// The "extra space" pattern removed by the normalizer's preprocessing step.
///
/// Any run of two or more consecutive whitespace characters is considered
/// incidental (indentation, blank lines, trailing spaces in multi-line
/// literals) and is deleted outright. Single spaces and lone newlines are
/// meaningful and survive.
pub static EXTRA_SPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Check whether the byte following the leading `<` is an ASCII uppercase
/// letter. This is what distinguishes a component tag from an HTML element.
///
/// Operates on the second byte of the line, so it mirrors the positional
/// check the classifier predicates use elsewhere. Returns false when the
/// line is too short to have a second byte.
pub fn first_letter_is_uppercase(line: &str) -> bool {
    matches!(line.as_bytes().get(1), Some(b) if b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_space_pattern() {
        assert_eq!(EXTRA_SPACE_REGEX.replace_all("a  b", ""), "ab");
        assert_eq!(EXTRA_SPACE_REGEX.replace_all("a \n b", ""), "ab");
        assert_eq!(EXTRA_SPACE_REGEX.replace_all("   ", ""), "");
    }

    #[test]
    fn test_single_whitespace_survives() {
        assert_eq!(EXTRA_SPACE_REGEX.replace_all("a b", ""), "a b");
        assert_eq!(EXTRA_SPACE_REGEX.replace_all("a\nb", ""), "a\nb");
    }

    #[test]
    fn test_first_letter_case() {
        assert!(first_letter_is_uppercase("<Hello/>"));
        assert!(!first_letter_is_uppercase("<hello/>"));
        assert!(!first_letter_is_uppercase("<1px/>"));
        assert!(!first_letter_is_uppercase("<"));
        assert!(!first_letter_is_uppercase(""));
    }
}
