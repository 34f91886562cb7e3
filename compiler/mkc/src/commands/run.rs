//! `run` and `eval`: execute a whole program.

use std::process::ExitCode;

use mk_eval::{Environment, Interpreter};

use super::{read_or_report, EXIT_FAILURE};
use crate::{run_source, Outcome};

/// Run a source file. Output comes only from `puts`; failures go to stderr.
pub fn run_file(path: &str) -> ExitCode {
    let source = match read_or_report(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let outcome = run_source(&source, &Interpreter::new(), &Environment::new());
    if let Some(text) = outcome.render().filter(|_| outcome.is_failure()) {
        eprintln!("{path}: {text}");
    }
    exit_code(&outcome)
}

/// Evaluate source given on the command line and print its value.
pub fn eval_source(source: &str) -> ExitCode {
    let outcome = run_source(source, &Interpreter::new(), &Environment::new());
    if let Some(text) = outcome.render() {
        if outcome.is_failure() {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }
    exit_code(&outcome)
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    if outcome.is_failure() {
        ExitCode::from(EXIT_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}
