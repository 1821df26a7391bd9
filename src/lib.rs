//! # jsx-lex
//!
//! A line-oriented lexer for a JSX-like markup dialect.
//!
//! The pipeline has two stages: a normalizer that rewrites raw markup so each
//! physical line holds at most one construct (a tag or a run of text), and a
//! classifier that assigns each line one of five kinds: text, HTML open/close
//! tag, self-closing HTML tag, capitalized component tag, or empty line.
//!
//! ## Testing
//!
//! Canonical markup samples used across the unit tests live in the
//! [testing module](jsx_lex::testing).

pub mod jsx_lex;
