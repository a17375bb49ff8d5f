use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{
        ast::{Function, Program},
        expressions::Expr,
        statements::{BlockStmt, Stmt},
        types::ReturnType,
    },
    errors::errors::{Error, ErrorImpl},
};

#[derive(Debug, Default)]
pub struct TypeChecker {
    /// Every function seen so far, by name
    functions: HashMap<String, ReturnType>,
    /// Name and return type of the function being checked
    current_function: Option<(String, ReturnType)>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    pub fn declare_function(&mut self, function: &Function) -> Result<(), Error> {
        if self.functions.contains_key(&function.name) {
            return Err(Error::new(
                ErrorImpl::FunctionAlreadyDeclared {
                    function: function.name.clone(),
                },
                function.span.start.clone(),
            ));
        }

        self.functions
            .insert(function.name.clone(), function.return_type);
        Ok(())
    }

    fn current_return_type(&self) -> ReturnType {
        self.current_function
            .as_ref()
            .map_or(ReturnType::Int, |(_, return_type)| *return_type)
    }
}

/// Checks an expression and returns its type.
pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &Expr) -> Result<ReturnType, Error> {
    match expr {
        Expr::IntegerLiteral(_) => Ok(ReturnType::Int),
        Expr::FloatLiteral(float) => Err(Error::new(
            ErrorImpl::UnsupportedExpression {
                shape: String::from(expr.shape()),
            },
            float.span.start.clone(),
        )),
        Expr::Binary(binary) => {
            type_check_expr(type_checker, &binary.left)?;
            type_check_expr(type_checker, &binary.right)?;
            Ok(ReturnType::Int)
        }
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::Block(block) => type_check_block(type_checker, block),
        Stmt::Expression(expression_stmt) => {
            type_check_expr(type_checker, &expression_stmt.expression)?;
            Ok(())
        }
        Stmt::Return(return_stmt) => {
            let received = type_check_expr(type_checker, &return_stmt.value)?;
            let expected = type_checker.current_return_type();

            // Only reachable from hand-built functions until a keyword maps to `void`

            if received != expected {
                return Err(Error::new(
                    ErrorImpl::TypeMatchError {
                        expected: expected.to_string(),
                        received: received.to_string(),
                    },
                    return_stmt.span.start.clone(),
                ));
            }

            Ok(())
        }
    }
}

pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) -> Result<(), Error> {
    for stmt in block.iter() {
        type_check_stmt(type_checker, stmt)?;
    }

    Ok(())
}

pub fn type_check_function(
    type_checker: &mut TypeChecker,
    function: &Function,
    is_entry: bool,
) -> Result<(), Error> {
    type_checker.declare_function(function)?;
    type_checker.current_function = Some((function.name.clone(), function.return_type));

    type_check_block(type_checker, &function.body)?;

    // The entry function falls through into the exit sequence
    if !is_entry && function.return_type == ReturnType::Int && !function.body.contains_return() {
        return Err(Error::new(
            ErrorImpl::MissingReturn {
                function: function.name.clone(),
            },
            function.span.start.clone(),
        ));
    }

    type_checker.current_function = None;
    Ok(())
}

/// Validates a whole program. Functions are checked in declaration order and
/// the first problem found is returned.
pub fn type_check(program: &Program) -> Result<(), Error> {
    let mut type_checker = TypeChecker::new();

    for function in program.functions() {
        type_check_function(&mut type_checker, function, program.is_entry(function))?;
    }

    debug!(functions = type_checker.functions.len(), "type checked program");
    Ok(())
}
