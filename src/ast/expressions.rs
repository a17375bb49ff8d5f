use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

/// Expression Types
///
/// Every expression the parser can build. Expressions are immutable once
/// constructed and own their operands.
#[derive(Debug, Clone)]
pub enum Expr {
    IntegerLiteral(IntegerExpr),
    /// Reserved: no stage produces or lowers floating-point values
    FloatLiteral(FloatExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::IntegerLiteral(expr) => &expr.span,
            Expr::FloatLiteral(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }

    /// Short description of the node's shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Expr::IntegerLiteral(_) => "integer literal",
            Expr::FloatLiteral(_) => "floating-point literal",
            Expr::Binary(_) => "binary expression",
        }
    }
}

/// Prints the expression as a fully parenthesised prefix form,
/// e.g. `(- (+ 1 2) 3)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::IntegerLiteral(expr) => write!(f, "{}", expr.value),
            Expr::FloatLiteral(expr) => write!(f, "{}", expr.value),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.operator.value, expr.left, expr.right),
        }
    }
}

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i32,
    pub span: Span,
}

/// Float Expression
#[derive(Debug, Clone)]
pub struct FloatExpr {
    pub value: f32,
    pub span: Span,
}

/// Binary Expression
/// Represents `left operator right`. The operator token keeps the symbol
/// text and its position.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}
