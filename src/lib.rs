#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use tracing::debug;

use crate::{
    config::Config,
    errors::errors::{Error, ErrorTip},
};

pub mod ast;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A 1-based line and column inside a named source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline over one source file and returns the assembly text.
///
/// Each stage consumes the previous stage's output; the first error stops the
/// pipeline and nothing is emitted.
pub fn compile_source(source: &str, file_name: &str, config: &Config) -> Result<String, Error> {
    let file = Rc::new(String::from(file_name));

    let tokens = lexer::lexer::tokenize(source, Some(String::from(file_name)));
    if config.verbose {
        for token in tokens.iter() {
            debug!("{}", token.debug());
        }
    }

    let program = parser::parser::parse(tokens, Rc::clone(&file))?;
    if config.verbose {
        debug!("{:#?}", program);
    }

    type_checker::type_checker::type_check(&program)?;

    let assembly = compiler::compiler::compile(&program)?;
    if config.verbose {
        debug!("\n{}", assembly);
    }

    Ok(assembly)
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth(line as usize - 1)
}

/// Renders an error the way the driver prints it:
///
/// ```text
/// Error: message
/// -> final.c
///   |
/// 2 | return 5 #
///   | ---------^
/// ```
pub fn display_error(error: &Error, file: &str, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return rendered;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
