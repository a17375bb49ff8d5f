//! Semantic analysis module.
//!
//! This module checks a parsed program before code generation:
//!
//! - Function names are unique
//! - Return statements agree with the function's return type. Only `int`
//!   is spelled in source today, so this only fires for `void` functions
//!   built directly on the AST
//! - Functions returning int (other than the entry point) actually return
//! - Only expression shapes the backend can lower reach it
//!
//! The language has a single integer type, so every expression is an int.

pub mod type_checker;
