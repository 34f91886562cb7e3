//! End-to-end evaluation tests: source text in, objects out.

mod builtins;
mod collections;
mod control_flow;
mod errors;

use crate::{buffer_handler, Environment, Interpreter, Object};

/// Parse and evaluate `source` in a fresh environment.
fn run(source: &str) -> Object {
    let result = mk_parse::parse(source);
    assert!(
        result.errors.is_empty(),
        "parse errors in {source:?}: {:?}",
        result.errors
    );
    Interpreter::new().eval_program(&result.program, &Environment::new())
}

/// Like [`run`], also returning everything `puts` printed.
fn run_with_output(source: &str) -> (Object, String) {
    let result = mk_parse::parse(source);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let output = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(output.clone())
        .build();
    let value = interpreter.eval_program(&result.program, &Environment::new());
    (value, output.get_output())
}

/// Evaluate and render with the inspect form.
fn inspect(source: &str) -> String {
    run(source).to_string()
}

/// Evaluate and return the error message, failing if evaluation succeeded.
fn error_message(source: &str) -> String {
    match run(source) {
        Object::Error(error) => error.to_string(),
        other => panic!("expected an error from {source:?}, got {other}"),
    }
}
