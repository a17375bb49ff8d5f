use tracing::debug;

use crate::{
    ast::{
        ast::Function,
        expressions::Expr,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{lookups::sorted_kinds, parser::Parser};

/// Leading characters stripped from function names.
const NAME_SIGILS: [char; 2] = ['@', '$'];

/// What closes a statement sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// A blank line followed by the next function, or the end of input
    Function,
    /// A `}` token
    Curly,
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser);
    }

    if !parser.get_nud_lookup().contains_key(&kind) {
        return Err(parser.unexpected(parser.statement_kinds()));
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    expect_end_of_stmt(parser)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

/// Consumes the end-of-statement token. A `}` also ends a statement but is
/// left for the enclosing block.
fn expect_end_of_stmt(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::EndOfStatement => {
            parser.advance();
            Ok(())
        }
        TokenKind::CloseCurly => Ok(()),
        _ => {
            let mut expected = vec![TokenKind::EndOfStatement, TokenKind::CloseCurly];
            expected.extend(sorted_kinds(parser.get_led_lookup()));
            Err(parser.unexpected(expected))
        }
    }
}

/// Whether the blank line under the cursor closes a function body: only
/// when the next non-blank token starts a function or ends the input.
fn blank_line_ends_body(parser: &Parser) -> bool {
    let next = parser.peek_past(TokenKind::EmptyLine);
    next == TokenKind::EOF || parser.is_function_start(next)
}

/// Parses statements in order until `end` is reached. The closing token is
/// not consumed.
pub fn parse_block(parser: &mut Parser, end: BlockEnd) -> Result<BlockStmt, Error> {
    let start = parser.get_position();
    let mut body = Vec::new();

    loop {
        match parser.current_token_kind() {
            // Empty statements
            TokenKind::EndOfStatement => {
                parser.advance();
            }
            TokenKind::EmptyLine => {
                if end == BlockEnd::Function && blank_line_ends_body(parser) {
                    break;
                }
                parser.advance();
            }
            TokenKind::EOF => break,
            TokenKind::CloseCurly if end == BlockEnd::Curly => break,
            kind if parser.is_function_start(kind) => break,
            _ => body.push(parse_stmt(parser)?),
        }
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let mut block = parse_block(parser, BlockEnd::Curly)?;
    let close = parser.expect(TokenKind::CloseCurly)?;
    expect_end_of_stmt(parser)?;

    block.span = Span {
        start,
        end: close.span.end,
    };

    Ok(Stmt::Block(block))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let value: Expr = parse_expr(parser, BindingPower::Default)?;
    let end = value.get_span().end.clone();

    expect_end_of_stmt(parser)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span { start, end },
    }))
}

/// Parses the parameter list of a function header.
///
/// Only the empty list `()` is part of the language so far; typed
/// parameters slot in between the parentheses.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<String>, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let parameters = Vec::new();
    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}

/// Parses `int @name():` followed by the function body.
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    let start_token = parser.current_token().clone();
    let Some(return_type) = parser
        .get_return_type_lookup()
        .get(&start_token.kind)
        .copied()
    else {
        return Err(parser.unexpected(sorted_kinds(parser.get_return_type_lookup())));
    };
    parser.advance();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected function name after return type"),
        },
        parser.get_position(),
    );
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let name = String::from(
        name_token
            .value
            .strip_prefix(NAME_SIGILS)
            .unwrap_or(&name_token.value),
    );

    let arguments = parse_parameters(parser)?;

    parser.expect(TokenKind::Colon)?;
    if parser.current_token_kind() == TokenKind::EndOfStatement {
        parser.advance();
    }

    let body = parse_block(parser, BlockEnd::Function)?;

    debug!(function = %name, statements = body.len(), "parsed function");

    Ok(Function {
        return_type,
        name,
        arguments,
        span: Span {
            start: start_token.span.start,
            end: body.span.end.clone(),
        },
        body,
    })
}
