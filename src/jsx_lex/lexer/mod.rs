//! Lexer module for the JSX-like markup dialect
//!
//! This module contains the normalization pipeline: raw tokenization of the
//! markup into angle-bracket and text tokens, the line-break insertion
//! transform, and the detokenizer that renders the result back into a string
//! with one construct per line.

pub mod detokenizer;
pub mod line_break_transform;
pub mod normalizer;
pub mod tokens;

pub use detokenizer::detokenize;
pub use line_break_transform::insert_line_breaks;
pub use normalizer::{collapse_extra_whitespace, normalize};
pub use tokens::{tokenize, tokenize_with_spans, MarkupLexer, Token};
