//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! Program, function and statement structure is parsed by recursive
//! descent; expressions use a Pratt parser driven by the lookup tables:
//!
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Return types of the keywords that introduce a function

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::{
        ast::{Program, ENTRY_FUNCTION},
        types::ReturnType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, sorted_kinds, BPLookup, BindingPower, LEDHandler, LEDLookup,
        NUDHandler, NUDLookup, ReturnTypeLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_function,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, a cursor into it and the lookup
/// tables for statements, expressions and function headers.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for the return type named by a function-introducing keyword
    return_type_lookup: ReturnTypeLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with
    /// one, so the cursor can never run past the end.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::new(1, 1, Rc::clone(&file)));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: position.clone(),
                    end: position,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            return_type_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor stays on `EOF` once it gets there.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Advances past every consecutive token of `kind`.
    pub fn skip(&mut self, kind: TokenKind) {
        while self.current_token_kind() == kind && kind != TokenKind::EOF {
            self.advance();
        }
    }

    /// Kind of the first token at or after the cursor that is not `kind`.
    pub fn peek_past(&self, kind: TokenKind) -> TokenKind {
        self.tokens[self.pos..]
            .iter()
            .map(|token| token.kind)
            .find(|token_kind| *token_kind != kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Builds the error for the current token when one of `expected` was
    /// wanted. An error token from the lexer is reported as such.
    pub fn unexpected(&self, expected: Vec<TokenKind>) -> Error {
        let token = self.current_token();
        if token.kind == TokenKind::Error {
            return Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            );
        }

        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: describe(token),
            },
            token.span.start.clone(),
        )
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token if it matches. Error tokens always produce
    /// a lexical error, whatever `error` says.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind == expected_kind {
            return Ok(self.advance().clone());
        }

        match error {
            Some(error) if kind != TokenKind::Error => Err(error),
            _ => Err(self.unexpected(vec![expected_kind])),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Whether `kind` is a keyword that starts a function definition.
    pub fn is_function_start(&self, kind: TokenKind) -> bool {
        self.return_type_lookup.contains_key(&kind)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the return type lookup table.
    pub fn get_return_type_lookup(&self) -> &ReturnTypeLookup {
        &self.return_type_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a keyword that introduces a function returning `return_type`.
    pub fn return_type(&mut self, kind: TokenKind, return_type: ReturnType) {
        self.return_type_lookup.insert(kind, return_type);
    }

    /// Every token kind that may start a statement.
    pub fn statement_kinds(&self) -> Vec<TokenKind> {
        let mut kinds = sorted_kinds(&self.stmt_lookup);
        kinds.extend(sorted_kinds(&self.nud_lookup));
        kinds.sort();
        kinds
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// Human readable text of a token for diagnostics.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::EmptyLine => String::from("<blank line>"),
        TokenKind::EOF => String::from("<end of input>"),
        _ => token.value.clone(),
    }
}

/// Parses a stream of tokens into a [`Program`].
///
/// Functions are separated by one or more blank lines. After the last
/// function only blank lines may remain. Fails with a semantic error when no
/// function is named `main`.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    parser.skip(TokenKind::EmptyLine);

    let mut functions = vec![parse_function(&mut parser)?];

    while parser.current_token_kind() == TokenKind::EmptyLine
        && parser.is_function_start(parser.peek_past(TokenKind::EmptyLine))
    {
        parser.skip(TokenKind::EmptyLine);
        functions.push(parse_function(&mut parser)?);
    }

    parser.skip(TokenKind::EmptyLine);
    if parser.current_token_kind() != TokenKind::EOF {
        return Err(parser.unexpected(vec![TokenKind::EOF, TokenKind::EmptyLine]));
    }

    debug!(file = %parser.get_file(), functions = functions.len(), "parsed program");
    Program::new(ENTRY_FUNCTION, functions, parser.get_position())
}
