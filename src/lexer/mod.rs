//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Line-by-line tokenization using anchored regex patterns
//! - Recognition of keywords, sigil identifiers, integer literals and operators
//! - Blank-line markers used as function separators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
