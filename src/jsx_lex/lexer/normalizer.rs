//! Normalization pipeline for raw markup
//!
//! Rewrites a raw markup string into one construct per physical line:
//!
//! 1. collapse incidental whitespace (the "extra space" pattern);
//! 2. tokenize into angle-bracket / newline / text tokens;
//! 3. insert line breaks around brackets (line-break transform);
//! 4. detokenize back into a string.
//!
//! The pass is pure and single-forward: only newline characters are ever
//! inserted, and every bracket and text character of the collapsed input
//! appears verbatim in the output.

use crate::jsx_lex::constants::EXTRA_SPACE_REGEX;
use crate::jsx_lex::lexer::detokenizer::detokenize;
use crate::jsx_lex::lexer::line_break_transform::insert_line_breaks;
use crate::jsx_lex::lexer::tokens::tokenize_with_spans;

/// Delete every run of two or more consecutive whitespace characters.
///
/// Multi-line markup literals carry indentation and blank lines that have no
/// meaning in the dialect; removing them up front keeps the bracket scan free
/// of whitespace bookkeeping. Single spaces inside text runs survive.
pub fn collapse_extra_whitespace(markup: &str) -> String {
    EXTRA_SPACE_REGEX.replace_all(markup, "").into_owned()
}

/// Normalize raw markup into one construct per line.
///
/// The classifier consumes the result line by line. Non-string input cannot
/// reach this function; the signature enforces what the dialect's original
/// runtime check ("argument should be a string") could only verify at call
/// time, so normalization itself is infallible.
pub fn normalize(markup: &str) -> String {
    let collapsed = collapse_extra_whitespace(markup);
    let tokens = insert_line_breaks(tokenize_with_spans(&collapsed));
    detokenize(&collapsed, &tokens)
}
