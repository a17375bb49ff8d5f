//! Main compiler module.
//!
//! This module contains the core Compiler structure. It walks the program
//! once, in declaration order, and appends x86-64 assembly (AT&T syntax) to
//! a text buffer. The language has no branches, so no label needs to be
//! resolved after the fact.

use tracing::debug;

use crate::{
    ast::ast::{Function, Program},
    errors::errors::Error,
};

use super::stmt::gen_statement;

/// Symbol the entry function is emitted under.
pub const ENTRY_SYMBOL: &str = "main";

/// The main compiler structure that holds the state of code generation.
pub struct Compiler<'a> {
    /// The program being compiled
    pub program: &'a Program,
    /// The assembly emitted so far
    pub output: String,
}

impl<'a> Compiler<'a> {
    pub fn new(program: &'a Program) -> Self {
        Compiler {
            program,
            output: String::new(),
        }
    }

    /// Appends one indented instruction or directive.
    pub fn emit(&mut self, instruction: &str) {
        self.output.push('\t');
        self.output.push_str(instruction);
        self.output.push('\n');
    }

    pub fn emit_label(&mut self, label: &str) {
        self.output.push_str(label);
        self.output.push_str(":\n");
    }

    pub fn emit_blank_line(&mut self) {
        self.output.push('\n');
    }

    /// The symbol a function is emitted under. The entry function is aliased
    /// to the conventional entry symbol.
    pub fn symbol_for(&self, function: &'a Function) -> &'a str {
        if self.program.is_entry(function) {
            ENTRY_SYMBOL
        } else {
            &function.name
        }
    }

    /// Exits the process with status zero through the `exit` system call.
    fn gen_exit(&mut self) {
        self.emit_blank_line();
        self.emit("movq $60, %rax");
        self.emit("xorq %rdi, %rdi");
        self.emit("syscall");
    }

    fn gen_function(&mut self, function: &'a Function) -> Result<(), Error> {
        let symbol = self.symbol_for(function);
        self.emit_label(symbol);

        for statement in function.body.iter() {
            gen_statement(self, statement)?;
        }

        if self.program.is_entry(function) {
            self.gen_exit();
        }

        self.emit_blank_line();
        debug!(function = %function.name, symbol, "generated function");
        Ok(())
    }

    fn gen(&mut self) -> Result<(), Error> {
        self.output.push_str(".text\n");

        let program = self.program;
        for function in program.functions() {
            let symbol = self.symbol_for(function);
            self.emit(&format!(".global {}", symbol));
        }
        self.emit_blank_line();

        for function in program.functions() {
            self.gen_function(function)?;
        }

        Ok(())
    }
}

/// Generates the assembly text for a whole program.
///
/// Returns the complete text or the first lowering error; partial output is
/// never returned.
pub fn compile(program: &Program) -> Result<String, Error> {
    let mut compiler = Compiler::new(program);
    compiler.gen()?;

    Ok(compiler.output)
}
