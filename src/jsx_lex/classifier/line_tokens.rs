//! Line token types produced by the classifier
//!
//! A line token pairs one normalized line with its classification. The kind
//! set covers every possible line: the four construct kinds plus an explicit
//! empty-line kind, so classification is total and never relies on
//! out-of-bounds index behavior.

use std::fmt;

/// The classification of a single normalized line
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineKind {
    /// A run of text with no surrounding brackets
    Text,

    /// An HTML open or close tag (`<div>`, `</div>`). The lexical shape of
    /// the two is identical except for the leading slash, recorded here as
    /// `closing`.
    HtmlTag { closing: bool },

    /// A self-closing HTML tag (`<img/>`)
    SelfClosingHtmlTag,

    /// A self-closing tag whose name starts with an uppercase letter
    /// (`<HelloWorld/>`)
    Component,

    /// An empty line, typically a trailing newline artifact of normalization
    EmptyLine,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Text => "TEXT",
            LineKind::HtmlTag { closing: false } => "HTML_TAG",
            LineKind::HtmlTag { closing: true } => "CLOSING_HTML_TAG",
            LineKind::SelfClosingHtmlTag => "SELF_CLOSING_HTML_TAG",
            LineKind::Component => "COMPONENT",
            LineKind::EmptyLine => "EMPTY_LINE",
        };
        write!(f, "{}", name)
    }
}

/// One normalized line paired with its kind.
///
/// Ownership of the line content moves to the token; the caller decides how
/// long the stream lives.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineToken {
    /// The normalized line exactly as the classifier saw it
    pub content: String,

    /// The classification of this line
    pub kind: LineKind,
}

impl LineToken {
    pub fn new(content: impl Into<String>, kind: LineKind) -> Self {
        LineToken {
            content: content.into(),
            kind,
        }
    }
}

impl fmt::Display for LineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_names() {
        assert_eq!(format!("{}", LineKind::Text), "TEXT");
        assert_eq!(format!("{}", LineKind::HtmlTag { closing: false }), "HTML_TAG");
        assert_eq!(
            format!("{}", LineKind::HtmlTag { closing: true }),
            "CLOSING_HTML_TAG"
        );
        assert_eq!(
            format!("{}", LineKind::SelfClosingHtmlTag),
            "SELF_CLOSING_HTML_TAG"
        );
        assert_eq!(format!("{}", LineKind::Component), "COMPONENT");
        assert_eq!(format!("{}", LineKind::EmptyLine), "EMPTY_LINE");
    }

    #[test]
    fn test_line_token_display() {
        let token = LineToken::new("<img/>", LineKind::SelfClosingHtmlTag);
        assert_eq!(format!("{}", token), "SELF_CLOSING_HTML_TAG <img/>");
    }

    #[test]
    fn test_line_token_serialization() {
        let token = LineToken::new("salam", LineKind::Text);
        let json = serde_json::to_string(&token).unwrap();
        let back: LineToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
