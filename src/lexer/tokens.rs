use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    EmptyLine,
    EndOfStatement,
    Error,

    IntegerLiteral,
    // Reserved, never produced by the lexer
    FloatLiteral,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Colon,

    Plus,
    Dash,

    // Reserved
    Int,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::IntegerLiteral,
            TokenKind::Error,
        ]) {
            format!("{} {} ({})", self.span.start, self.kind, self.value)
        } else {
            format!("{} {} ()", self.span.start, self.kind)
        }
    }
}
