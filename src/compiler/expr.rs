use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::compiler::Compiler;

/// Generates code that leaves the value of `expression` in `%eax`.
///
/// Binary operands are evaluated left to right; the left value waits on the
/// stack while the right one is computed.
pub fn gen_expression(compiler: &mut Compiler<'_>, expression: &Expr) -> Result<(), Error> {
    match expression {
        Expr::IntegerLiteral(int) => {
            compiler.emit(&format!("movl ${}, %eax", int.value));
        }
        Expr::Binary(binary) => {
            let instruction = match binary.operator.kind {
                TokenKind::Plus => "addl %edi, %eax",
                TokenKind::Dash => "subl %edi, %eax",
                _ => {
                    return Err(Error::new(
                        ErrorImpl::UnsupportedLowering {
                            shape: format!("binary operator `{}`", binary.operator.value),
                        },
                        binary.operator.span.start.clone(),
                    ))
                }
            };

            gen_expression(compiler, &binary.left)?;
            compiler.emit("pushq %rax");
            gen_expression(compiler, &binary.right)?;
            compiler.emit("movl %eax, %edi");
            compiler.emit("popq %rax");
            compiler.emit(instruction);
        }
        Expr::FloatLiteral(float) => {
            return Err(Error::new(
                ErrorImpl::UnsupportedLowering {
                    shape: String::from(expression.shape()),
                },
                float.span.start.clone(),
            ));
        }
    }

    Ok(())
}
