//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - The stage taxonomy (lex, parse, semantic, codegen)
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
