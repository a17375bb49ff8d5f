use std::slice::Iter;

use crate::Span;

use super::expressions::Expr;

/// Statement Types
///
/// A block is a statement in its own right, so blocks nest.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(BlockStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether a return statement appears anywhere in the block, nested
    /// blocks included.
    pub fn contains_return(&self) -> bool {
        self.iter().any(|stmt| match stmt {
            Stmt::Return(_) => true,
            Stmt::Block(block) => block.contains_return(),
            Stmt::Expression(_) => false,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}
