//! Code generation module for the compiler.
//!
//! This module lowers a checked [`Program`](crate::ast::ast::Program) into
//! textual x86-64 assembly. It handles:
//!
//! - Section and symbol directives
//! - One label per function, with the entry function aliased to `main`
//! - Lowering of statements and expressions
//! - The exit sequence appended to the entry function

pub mod compiler;
pub mod expr;
pub mod stmt;
