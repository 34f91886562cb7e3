//! Tree-walking interpreter.
//!
//! Evaluation is a direct recursion over the syntax tree. Internally every
//! step returns a [`Flow`]: `Ok` for an ordinary value, `Err` for anything
//! that must unwind, either a `return` on its way to the enclosing call or
//! an [`EvalError`] on its way to the top. `?` does the unwinding. The
//! public entry points turn the outcome back into a single [`Object`].

mod builder;
mod expressions;
mod function_call;
mod statements;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use mk_ir::{Node, Program};

use crate::builtins::Builtins;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalError, Object};

/// Non-local exit from an evaluation step.
#[derive(Debug)]
pub(crate) enum Interrupt {
    /// `return` unwinding to the nearest function call (or the program).
    Return(Object),
    /// Error unwinding to the top.
    Error(EvalError),
}

impl From<EvalError> for Interrupt {
    fn from(error: EvalError) -> Self {
        Interrupt::Error(error)
    }
}

pub(crate) type Flow<T = Object> = Result<T, Interrupt>;

/// Evaluator configuration: the built-in table and the output sink.
///
/// Holds no program state; bindings live in the [`Environment`] passed to
/// each call, so one interpreter can serve many environments.
pub struct Interpreter {
    builtins: Rc<Builtins>,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Standard built-ins, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a whole program. A top-level `return` ends the program with
    /// its value; an error ends it with an [`Object::Error`].
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Object {
        Self::settle(self.eval_statements(&program.statements, env))
    }

    /// Evaluate any node as if it stood at top level: a `return` inside it
    /// yields the returned value, and a `let` yields `null`.
    pub fn eval<'a>(&self, node: impl Into<Node<'a>>, env: &Environment) -> Object {
        match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(stmt) => {
                Self::settle(self.eval_statement(stmt, env).map(|v| v.unwrap_or(Object::Null)))
            }
            Node::Block(block) => Self::settle(self.eval_block(block, env)),
            Node::Expression(expr) => Self::settle(self.eval_expression(expr, env)),
        }
    }

    /// Collapse a flow into the value seen by callers.
    fn settle(flow: Flow) -> Object {
        match flow {
            Ok(value) | Err(Interrupt::Return(value)) => value,
            Err(Interrupt::Error(error)) => {
                tracing::debug!(%error, "evaluation failed");
                Object::Error(error)
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
