//! Type definitions for the AST.
//!
//! The language only knows a single integer type. Functions either return
//! it or return nothing.

use std::fmt::Display;

/// Represents the return type of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Int,
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Void => write!(f, "void"),
            ReturnType::Int => write!(f, "int"),
        }
    }
}
