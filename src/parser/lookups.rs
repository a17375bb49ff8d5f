use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt, types::ReturnType},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator strength, weakest first.
///
/// `Default` is the threshold statements start expression parsing with;
/// nothing binds weaker than it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Primary,
}

impl BindingPower {
    /// The next stronger binding power. Used as the threshold for the right
    /// operand so operators of equal strength associate to the left.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Additive,
            BindingPower::Additive | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);

    // Literals and grouping
    parser.nud(TokenKind::IntegerLiteral, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);

    // Keywords that introduce a function
    parser.return_type(TokenKind::Int, ReturnType::Int);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
pub type ReturnTypeLookup = HashMap<TokenKind, ReturnType>;

/// Keys of a lookup table in a stable order, for "expected one of" lists.
pub fn sorted_kinds<V>(lookup: &HashMap<TokenKind, V>) -> Vec<TokenKind> {
    let mut kinds = lookup.keys().copied().collect::<Vec<_>>();
    kinds.sort();
    kinds
}
