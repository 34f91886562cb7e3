//! Evaluator for Monkey programs.
//!
//! Walks the syntax tree produced by `mk_parse` and computes [`Object`]
//! values. Bindings live in an [`Environment`] chain; closures capture the
//! environment they were created in. Runtime failures are [`EvalError`]s
//! and surface to callers as [`Object::Error`].
//!
//! ```text
//! let env = Environment::new();
//! let value = Interpreter::new().eval_program(&program, &env);
//! ```

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod object;
mod operators;
mod print_handler;

pub use builtins::{Builtin, BuiltinFn, Builtins};
pub use environment::Environment;
pub use errors::{check_arity, EvalError, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use object::{FunctionObject, HashKey, HashObject, HashPair, Heap, Object, ObjectKind};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
