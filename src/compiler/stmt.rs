use crate::{ast::statements::Stmt, errors::errors::Error};

use super::{compiler::Compiler, expr::gen_expression};

pub fn gen_statement(compiler: &mut Compiler<'_>, statement: &Stmt) -> Result<(), Error> {
    match statement {
        Stmt::Block(block) => {
            for statement in block.iter() {
                gen_statement(compiler, statement)?;
            }
        }
        // Nothing can observe the value, it is computed and dropped
        Stmt::Expression(expression_stmt) => {
            gen_expression(compiler, &expression_stmt.expression)?;
        }
        Stmt::Return(return_stmt) => {
            gen_expression(compiler, &return_stmt.value)?;
            compiler.emit("ret");
        }
    }

    Ok(())
}
