use crate::{
    ast::expressions::{BinaryExpr, Expr, IntegerExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{sorted_kinds, BindingPower},
    parser::Parser,
};

/// Precedence climbing over the NUD/LED tables.
///
/// Parses a prefix expression, then keeps folding infix operators into it
/// while the operator binds at least as tightly as `bp`. Any token that is
/// not an infix operator ends the expression and is left for the caller.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected(sorted_kinds(parser.get_nud_lookup())));
    };

    let mut left = nud(parser)?;

    loop {
        let token_kind = parser.current_token_kind();
        let Some(operator_bp) = parser.get_bp_lookup().get(&token_kind).copied() else {
            break;
        };

        if operator_bp < bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::IntegerLiteral => {
            let token = parser.current_token();
            let Ok(value) = token.value.parse::<i32>() else {
                return Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                ));
            };

            Ok(Expr::IntegerLiteral(IntegerExpr {
                value,
                span: parser.advance().span.clone(),
            }))
        }
        _ => Err(parser.unexpected(vec![TokenKind::IntegerLiteral])),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp.tighter())?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
