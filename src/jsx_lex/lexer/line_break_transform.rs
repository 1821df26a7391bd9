//! Line-break insertion for the markup normalizer
//!
//! This module transforms a raw token stream so that every tag construct ends
//! up on its own physical line. Synthetic Newline tokens are inserted around
//! angle brackets according to two adjacency rules:
//!
//! - after `>`: unless the bracket is the last token or is already followed
//!   by a newline, the bracket terminates its line;
//! - before `<`: when the bracket directly follows text (rather than a line
//!   break or another tag's `>`), it starts a new line. A `<` whose
//!   predecessor is the very first character of the input is left alone.
//!
//! Both rules are evaluated against the incoming stream only; a newline
//! inserted by one rule never influences a later decision.

use crate::jsx_lex::lexer::tokens::Token;
use std::ops::Range;

/// Insert synthetic Newline tokens around angle brackets.
///
/// Inserted tokens carry an empty span (`0..0`) since they have no source
/// text behind them; all original tokens keep their spans untouched.
pub fn insert_line_breaks(tokens: Vec<(Token, Range<usize>)>) -> Vec<(Token, Range<usize>)> {
    let mut result = Vec::with_capacity(tokens.len());

    for (i, (token, span)) in tokens.iter().enumerate() {
        match token {
            Token::CloseAngle => {
                result.push((Token::CloseAngle, span.clone()));
                if let Some((next, _)) = tokens.get(i + 1) {
                    if !next.is_newline() {
                        result.push((Token::Newline, 0..0));
                    }
                }
            }
            Token::OpenAngle => {
                if open_bracket_needs_break(&tokens, i, span.start) {
                    result.push((Token::Newline, 0..0));
                }
                result.push((Token::OpenAngle, span.clone()));
            }
            _ => result.push((*token, span.clone())),
        }
    }

    result
}

/// An opening bracket starts a new line only when it follows a character
/// other than a newline or `>`, and that character is not the first character
/// of the input.
fn open_bracket_needs_break(tokens: &[(Token, Range<usize>)], index: usize, start: usize) -> bool {
    if index == 0 || start == 1 {
        return false;
    }
    let (prev, _) = &tokens[index - 1];
    !prev.is_newline() && !matches!(prev, Token::CloseAngle)
}
