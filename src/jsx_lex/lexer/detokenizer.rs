//! Detokenizer for the markup normalizer
//!
//! Renders a (possibly transformed) token stream back into a string. Tokens
//! keep byte spans into the source they were lexed from; synthetic Newline
//! tokens inserted by the line-break transform carry an empty span and render
//! as a plain line break.

use crate::jsx_lex::lexer::tokens::Token;
use std::ops::Range;

/// Render a token stream against the source string it was lexed from.
pub fn detokenize(source: &str, tokens: &[(Token, Range<usize>)]) -> String {
    let mut result = String::with_capacity(source.len() + tokens.len());

    for (token, span) in tokens {
        match token {
            Token::Newline => result.push('\n'),
            _ => result.push_str(&source[span.clone()]),
        }
    }

    result
}
