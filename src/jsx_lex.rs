//! Main module for jsx-lex library functionality

pub mod classifier;
pub mod constants;
pub mod lexer;
pub mod loader;
pub mod processor;

#[cfg(test)]
pub mod testing;
