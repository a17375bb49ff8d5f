use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z@$][a-zA-Z0-9_@$]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[ \t]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EndOfStatement, ";") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
    ];
}

/// Text value of the end-of-statement token produced by a line break.
pub const END_OF_LINE: &str = "<eol>";

pub struct Lexer {
    tokens: Vec<Token>,
    /// The current line with surrounding whitespace stripped
    line: String,
    line_number: u32,
    /// Bytes stripped from the start of the current line
    indent: usize,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            line: String::new(),
            line_number: 0,
            indent: 0,
            pos: 0,
            file: file_name,
        }
    }

    pub fn start_line(&mut self, raw_line: &str, line_number: u32) {
        let trimmed_start = raw_line.trim_start();
        self.indent = raw_line.len() - trimmed_start.len();
        self.line = String::from(trimmed_start.trim_end());
        self.line_number = line_number;
        self.pos = 0;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.line[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Position of a byte offset into the stripped line.
    pub fn position_at(&self, offset: usize) -> Position {
        Position::new(
            self.line_number,
            (self.indent + offset + 1) as u32,
            Rc::clone(&self.file),
        )
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position_at(self.pos),
            end: self.position_at(self.pos + len),
        }
    }

    fn push_marker(&mut self, kind: TokenKind, value: &str) {
        let span = self.span_of(0);
        self.push(MK_TOKEN!(kind, String::from(value), span));
    }

    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = regex.find(lexer.remainder()).map(|m| String::from(m.as_str())) else {
        return;
    };

    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::IntegerLiteral, matched, span));
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(value) = regex.find(lexer.remainder()).map(|m| String::from(m.as_str())) else {
        return;
    };

    let span = lexer.span_of(value.len());
    lexer.advance_n(value.len());

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value, span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value, span));
    }
}

/// Converts source text into tokens, one line at a time.
///
/// Lexing never fails: a character no pattern accepts becomes a
/// [`TokenKind::Error`] token and scanning carries on after it. Every
/// non-blank line ends with an end-of-statement token, every blank line
/// becomes an [`TokenKind::EmptyLine`] marker, and the sequence always ends
/// with an `EmptyLine` followed by `EOF`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(file);
    let mut line_count = 0;

    for (index, raw_line) in source.lines().enumerate() {
        line_count = index as u32 + 1;
        lex.start_line(raw_line, line_count);

        if lex.at_eol() {
            lex.push_marker(TokenKind::EmptyLine, "");
            continue;
        }

        while !lex.at_eol() {
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if pattern.regex.is_match(lex.remainder()) {
                    (pattern.handler)(&mut lex, &pattern.regex);
                    matched = true;
                    break;
                }
            }

            if !matched {
                let Some(c) = lex.at() else {
                    break;
                };

                trace!(line = line_count, character = %c, "unrecognised character");
                let span = lex.span_of(c.len_utf8());
                lex.push(MK_TOKEN!(TokenKind::Error, c.to_string(), span));
                lex.advance_n(c.len_utf8());
            }
        }

        if lex.last_kind() != Some(TokenKind::EndOfStatement) {
            lex.push_marker(TokenKind::EndOfStatement, END_OF_LINE);
        }
    }

    lex.start_line("", line_count + 1);
    lex.push_marker(TokenKind::EmptyLine, "");
    lex.push_marker(TokenKind::EOF, "EOF");

    trace!(count = lex.tokens.len(), "tokenized");
    lex.tokens
}
