//! Raw token definitions for the markup dialect
//!
//! The tokens are defined using the logos derive macro. The token set is
//! deliberately tiny: the normalizer only needs to know where angle brackets
//! and newlines sit; everything else is an opaque text run.

use logos::Logos;

/// All raw tokens produced from preprocessed markup
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `<` — opens a tag construct
    #[token("<")]
    OpenAngle,

    /// `>` — closes a tag construct
    #[token(">")]
    CloseAngle,

    /// A line break, either present in the source or inserted by the
    /// line-break transform
    #[token("\n")]
    Newline,

    /// A run of anything that is not an angle bracket or newline
    #[regex(r"[^<>\n]+")]
    Text,
}

impl Token {
    /// Check if this token is an angle bracket
    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::OpenAngle | Token::CloseAngle)
    }

    /// Check if this token is a line break
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}

/// Iterator over the raw tokens of a markup string
pub struct MarkupLexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> MarkupLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        MarkupLexer {
            inner: Token::lexer(source),
        }
    }

    /// Byte range of the most recently returned token
    pub fn span(&self) -> logos::Span {
        self.inner.span()
    }
}

impl<'a> Iterator for MarkupLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // The token patterns cover every possible character, so lexing
        // cannot fail; errors are filtered for form only.
        for result in self.inner.by_ref() {
            if let Ok(token) = result {
                return Some(token);
            }
        }
        None
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    MarkupLexer::new(source).collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = MarkupLexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        tokens.push((token, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_brackets() {
        let mut lexer = MarkupLexer::new("<>");
        assert_eq!(lexer.next(), Some(Token::OpenAngle));
        assert_eq!(lexer.next(), Some(Token::CloseAngle));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_simple_tag() {
        let tokens = tokenize("<div>");
        assert_eq!(
            tokens,
            vec![Token::OpenAngle, Token::Text, Token::CloseAngle]
        );
    }

    #[test]
    fn test_text_run_swallows_spaces_and_slashes() {
        let tokens = tokenize("hello world/");
        assert_eq!(tokens, vec![Token::Text]);
    }

    #[test]
    fn test_newline_token() {
        let tokens = tokenize("a\nb");
        assert_eq!(tokens, vec![Token::Text, Token::Newline, Token::Text]);
    }

    #[test]
    fn test_self_closing_tag() {
        let tokens = tokenize("<img/>");
        assert_eq!(
            tokens,
            vec![Token::OpenAngle, Token::Text, Token::CloseAngle]
        );
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "<div>salam";
        let tokens = tokenize_with_spans(source);
        assert_eq!(
            tokens,
            vec![
                (Token::OpenAngle, 0..1),
                (Token::Text, 1..4),
                (Token::CloseAngle, 4..5),
                (Token::Text, 5..10),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::OpenAngle.is_bracket());
        assert!(Token::CloseAngle.is_bracket());
        assert!(!Token::Text.is_bracket());

        assert!(Token::Newline.is_newline());
        assert!(!Token::OpenAngle.is_newline());
    }
}
