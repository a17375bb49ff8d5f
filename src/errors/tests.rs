//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.c".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        position(1, 4),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::Return],
            found: "foo".to_string(),
        },
        position(42, 3),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 3);
    assert_eq!(error.get_position().file.as_str(), "test.c");
}

#[test]
fn test_error_kinds() {
    let cases = [
        (
            ErrorImpl::NumberParseError {
                token: "99999999999".to_string(),
            },
            ErrorKind::Parse,
        ),
        (
            ErrorImpl::UnexpectedTokenDetailed {
                token: "(".to_string(),
                message: "expected function name after return type".to_string(),
            },
            ErrorKind::Parse,
        ),
        (
            ErrorImpl::MissingEntryFunction {
                entry: "main".to_string(),
            },
            ErrorKind::Semantic,
        ),
        (
            ErrorImpl::MissingReturn {
                function: "foo".to_string(),
            },
            ErrorKind::Semantic,
        ),
        (
            ErrorImpl::UnsupportedLowering {
                shape: "floating-point literal".to_string(),
            },
            ErrorKind::Codegen,
        ),
    ];

    for (internal, kind) in cases {
        assert_eq!(Error::new(internal, position(1, 1)).get_kind(), kind);
    }
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::EndOfStatement, TokenKind::CloseCurly],
            found: "1".to_string(),
        },
        position(2, 10),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "expected one of [EndOfStatement, CloseCurly], found `1`")
        }
        ErrorTip::None => panic!("Expected a suggestion"),
    }
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "void".to_string(),
            received: "int".to_string(),
        },
        position(3, 2),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(
        error.get_tip().to_string(),
        "Expected type `void`, received `int`"
    );
}

#[test]
fn test_error_without_tip() {
    let error = Error::new(
        ErrorImpl::UnsupportedExpression {
            shape: "floating-point literal".to_string(),
        },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::MissingEntryFunction {
            entry: "main".to_string(),
        },
        position(1, 1),
    );

    assert_eq!(
        error.to_string(),
        "SemanticError at test.c:1:1: no function named \"main\" to use as the entry point"
    );
}
