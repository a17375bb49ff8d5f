//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::ast::Program). It uses recursive descent
//! for functions and statements and a Pratt parser for expressions:
//!
//! - Program parsing (functions separated by blank lines)
//! - Statement parsing (return, expression statements, nested blocks)
//! - Expression parsing (integer literals, grouping, `+` and `-`)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
