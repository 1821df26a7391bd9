//! Classifier module for normalized markup lines
//!
//! Given a line produced by the normalizer, `classify` assigns exactly one
//! [`LineKind`]. The full string-to-token pipeline is exposed as [`lex`].

pub mod line_tokens;
pub mod predicates;

pub use line_tokens::{LineKind, LineToken};
pub use predicates::{is_component_tag, is_html_tag, is_self_closing_html_tag, is_text_node};

use crate::jsx_lex::lexer::normalize;

/// Classify a single normalized line.
///
/// Total over all strings: the empty line gets its own explicit kind, every
/// non-empty line satisfies exactly one of the four construct kinds.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::EmptyLine;
    }
    if is_component_tag(line) {
        LineKind::Component
    } else if is_self_closing_html_tag(line) {
        LineKind::SelfClosingHtmlTag
    } else if is_html_tag(line) {
        LineKind::HtmlTag {
            closing: line.starts_with("</"),
        }
    } else {
        LineKind::Text
    }
}

/// Lex raw markup into a stream of classified line tokens.
///
/// Normalizes the input, then classifies each resulting line. Lines are
/// consumed in order and ownership of the token stream passes to the caller.
pub fn lex(markup: &str) -> Vec<LineToken> {
    normalize(markup)
        .split('\n')
        .map(|line| LineToken::new(line, classify(line)))
        .collect()
}
