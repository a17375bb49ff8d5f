/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program and function nodes
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - types: Return types of functions
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
