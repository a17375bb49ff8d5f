use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::{statements::BlockStmt, types::ReturnType};

/// Name of the function every program has to define.
pub const ENTRY_FUNCTION: &str = "main";

/// The root of the AST: every function of the translation unit in
/// declaration order, one of which is the entry function.
#[derive(Debug, Clone)]
pub struct Program {
    entry_function: String,
    functions: Vec<Function>,
}

impl Program {
    /// Builds a program, failing unless exactly one function is named
    /// `entry_function`.
    ///
    /// `position` is reported when the entry function is missing. A second
    /// entry function is reported at its own position.
    pub fn new(
        entry_function: &str,
        functions: Vec<Function>,
        position: Position,
    ) -> Result<Self, Error> {
        let mut entries = functions
            .iter()
            .filter(|function| function.name == entry_function);

        if entries.next().is_none() {
            return Err(Error::new(
                ErrorImpl::MissingEntryFunction {
                    entry: String::from(entry_function),
                },
                position,
            ));
        }

        if let Some(duplicate) = entries.next() {
            return Err(Error::new(
                ErrorImpl::FunctionAlreadyDeclared {
                    function: String::from(entry_function),
                },
                duplicate.span.start.clone(),
            ));
        }

        Ok(Program {
            entry_function: String::from(entry_function),
            functions,
        })
    }

    pub fn entry_function(&self) -> &str {
        &self.entry_function
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn is_entry(&self, function: &Function) -> bool {
        function.name == self.entry_function
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    pub return_type: ReturnType,
    /// Name without its leading sigil
    pub name: String,
    /// Declared parameter names. The grammar only accepts an empty list for now.
    pub arguments: Vec<String>,
    pub body: BlockStmt,
    pub span: Span,
}
