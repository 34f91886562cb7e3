//! Monkey command-line front end.
//!
//! ```text
//! source ──► mk_lexer ──► mk_parse ──► mk_eval ──► Outcome
//! ```
//!
//! [`run_source`] drives one piece of source through the whole pipeline and
//! reports what a front end should show for it. The `mk` binary and the REPL
//! are thin shells around it.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use std::fmt::Write as _;

use mk_eval::{Environment, Interpreter, Object};
use mk_ir::StmtKind;
use mk_parse::ParseError;

/// Result of running one piece of source.
#[derive(Debug)]
pub enum Outcome {
    /// Parsing failed; nothing was evaluated.
    ParseErrors(Vec<ParseError>),
    /// Evaluation finished with this value, possibly an error object.
    Value(Object),
    /// Nothing to show: the input was empty or ended in a `let`.
    Silent,
}

impl Outcome {
    /// Parse errors, or evaluation ending in an error object.
    pub fn is_failure(&self) -> bool {
        match self {
            Outcome::ParseErrors(_) => true,
            Outcome::Value(value) => value.is_error(),
            Outcome::Silent => false,
        }
    }

    /// Text to show the user, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            Outcome::ParseErrors(errors) => Some(render_parse_errors(errors)),
            Outcome::Value(value) => Some(value.to_string()),
            Outcome::Silent => None,
        }
    }
}

/// `parser errors:` followed by one tab-indented message per line.
pub fn render_parse_errors(errors: &[ParseError]) -> String {
    let mut out = String::from("parser errors:");
    for error in errors {
        let _ = write!(out, "\n\t{}", error.message());
    }
    out
}

/// Parse `source` and, if it parsed cleanly, evaluate it in `env`.
///
/// Bindings made by the program stay in `env`, so successive calls with the
/// same environment behave like successive REPL lines.
pub fn run_source(source: &str, interpreter: &Interpreter, env: &Environment) -> Outcome {
    let result = mk_parse::parse(source);
    if result.has_errors() {
        tracing::debug!(count = result.errors.len(), "parse failed");
        return Outcome::ParseErrors(result.errors);
    }

    let value = interpreter.eval_program(&result.program, env);
    let ends_in_let = match result.program.statements.last() {
        Some(stmt) => matches!(stmt.kind, StmtKind::Let { .. }),
        None => true,
    };
    if ends_in_let && matches!(value, Object::Null) {
        Outcome::Silent
    } else {
        Outcome::Value(value)
    }
}
