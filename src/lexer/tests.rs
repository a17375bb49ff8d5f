//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and sigil identifiers
//! - Integer literals
//! - Punctuation and operators
//! - Line structure (end of statement, blank lines, terminal markers)
//! - Error tokens and recovery

use super::{
    lexer::{tokenize, END_OF_LINE},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.c".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_return_statement() {
    for n in [0, 5, 42, 2147483647] {
        let source = format!("return {};", n);
        let tokens = tokenize(&source, Some("test.c".to_string()));

        assert_eq!(tokens[0].kind, TokenKind::Return);
        assert_eq!(tokens[1].kind, TokenKind::IntegerLiteral);
        assert_eq!(tokens[1].value, n.to_string());
        assert_eq!(tokens[2].kind, TokenKind::EndOfStatement);
        assert_eq!(tokens[3].kind, TokenKind::EmptyLine);
        assert_eq!(tokens[4].kind, TokenKind::EOF);
        assert_eq!(tokens.len(), 5);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("int return", Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[1].value, "return");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("@main $foo bar_1 x@y integer", Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "@main");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "$foo");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "bar_1");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "x@y");
    // Keywords only match whole words
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "integer");
}

#[test]
fn test_tokenize_underscore_cannot_start_identifier() {
    let tokens = tokenize("_x", Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].value, "_");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
}

#[test]
fn test_tokenize_punctuation_and_operators() {
    assert_eq!(
        kinds("{ } ( ) : + -"),
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::EndOfStatement,
            TokenKind::EmptyLine,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_expression_without_spaces() {
    let tokens = tokenize("1+2-3", Some("test.c".to_string()));

    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].value, "2");
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].value, "3");
    assert_eq!(tokens[5].kind, TokenKind::EndOfStatement);
}

#[test]
fn test_tokenize_function_header() {
    assert_eq!(
        kinds("int @main():\n\treturn 5\n"),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::EndOfStatement,
            TokenKind::Return,
            TokenKind::IntegerLiteral,
            TokenKind::EndOfStatement,
            TokenKind::EmptyLine,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_blank_lines() {
    let tokens = tokenize("return 1\n\n   \t \nreturn 2", Some("test.c".to_string()));
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Return,
            TokenKind::IntegerLiteral,
            TokenKind::EndOfStatement,
            TokenKind::EmptyLine,
            TokenKind::EmptyLine,
            TokenKind::Return,
            TokenKind::IntegerLiteral,
            TokenKind::EndOfStatement,
            TokenKind::EmptyLine,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[4].span.start.line, 3);
}

#[test]
fn test_tokenize_semicolons() {
    let tokens = tokenize("return 1; return 2", Some("test.c".to_string()));

    assert_eq!(tokens[2].kind, TokenKind::EndOfStatement);
    assert_eq!(tokens[2].value, ";");
    assert_eq!(tokens[3].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::EndOfStatement);
    assert_eq!(tokens[5].value, END_OF_LINE);
}

#[test]
fn test_tokenize_tab_is_whitespace() {
    assert_eq!(
        kinds("return\t1\t+\t2"),
        vec![
            TokenKind::Return,
            TokenKind::IntegerLiteral,
            TokenKind::Plus,
            TokenKind::IntegerLiteral,
            TokenKind::EndOfStatement,
            TokenKind::EmptyLine,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EmptyLine, TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognised_character_recovers() {
    let tokens = tokenize("return # 5", Some("test.c".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Return);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].value, "#");
    assert_eq!(tokens[2].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[2].value, "5");
    assert_eq!(tokens[3].kind, TokenKind::EndOfStatement);
}

#[test]
fn test_tokenize_non_ascii_character() {
    let tokens = tokenize("return é1", Some("test.c".to_string()));

    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].value, "é");
    assert_eq!(tokens[2].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[2].value, "1");
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("int @main():\n    return 12", Some("test.c".to_string()));

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[1].span.end.column, 10);

    let number = &tokens[7];
    assert_eq!(number.kind, TokenKind::IntegerLiteral);
    assert_eq!(number.span.start.line, 2);
    // Column counts the stripped indentation
    assert_eq!(number.span.start.column, 12);
    assert_eq!(*number.span.start.file, "test.c");
}

#[test]
fn test_tokenize_default_file_name() {
    let tokens = tokenize("return 1", None);
    assert_eq!(*tokens[0].span.start.file, "shell");
}
