//! Statement and block evaluation.

use mk_ir::{BlockStatement, Stmt, StmtKind};

use super::{Flow, Interpreter, Interrupt};
use crate::{Environment, Object};

impl Interpreter {
    /// Run statements in order; the value is the last statement's, or
    /// `null` if there are none or the last one is a `let`. A `return` or
    /// error stops the sequence and propagates.
    pub(super) fn eval_statements(&self, statements: &[Stmt], env: &Environment) -> Flow {
        let mut result = Object::Null;
        for statement in statements {
            result = self.eval_statement(statement, env)?.unwrap_or(Object::Null);
        }
        Ok(result)
    }

    pub(super) fn eval_block(&self, block: &BlockStatement, env: &Environment) -> Flow {
        self.eval_statements(&block.statements, env)
    }

    /// `None` for statements that produce no value (`let`).
    pub(super) fn eval_statement(&self, statement: &Stmt, env: &Environment) -> Flow<Option<Object>> {
        match &statement.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.name.as_str(), value);
                Ok(None)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expression(expr, env)?,
                    None => Object::Null,
                };
                Err(Interrupt::Return(value))
            }
            StmtKind::Expr(expr) => self.eval_expression(expr, env).map(Some),
        }
    }
}
