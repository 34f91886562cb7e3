#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Cursor;

use mk_eval::{buffer_handler, Environment, Interpreter, Object};
use mkc::commands::{read_file, repl, PROMPT};
use mkc::{run_source, Outcome};
use pretty_assertions::assert_eq;

fn render(source: &str) -> Option<String> {
    run_source(source, &Interpreter::new(), &Environment::new()).render()
}

fn session(input: &str) -> String {
    let interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .build();
    let mut output = Vec::new();
    repl(Cursor::new(input), &mut output, &interpreter).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn values_render_with_inspect_form() {
    assert_eq!(render("1 + 2").as_deref(), Some("3"));
    assert_eq!(render(r#""mon" + "key""#).as_deref(), Some("monkey"));
    assert_eq!(render("[1, true]").as_deref(), Some("[1, true]"));
    assert_eq!(render("if (false) { 1 }").as_deref(), Some("null"));
}

#[test]
fn let_and_empty_input_are_silent() {
    let outcome = run_source("let x = 5;", &Interpreter::new(), &Environment::new());
    assert!(matches!(outcome, Outcome::Silent));
    assert!(!outcome.is_failure());
    assert_eq!(render(""), None);
}

#[test]
fn parse_errors_are_listed() {
    let outcome = run_source("let x 5; let = 10;", &Interpreter::new(), &Environment::new());
    assert!(outcome.is_failure());
    assert_eq!(
        outcome.render().unwrap(),
        "parser errors:\n\texpected next token to be =, got INT instead\
         \n\texpected next token to be IDENT, got = instead"
    );
}

#[test]
fn evaluation_errors_are_failures() {
    let outcome = run_source("5 + true", &Interpreter::new(), &Environment::new());
    assert!(outcome.is_failure());
    assert_eq!(
        outcome.render().as_deref(),
        Some("ERROR: type mismatch: INTEGER + BOOLEAN")
    );
}

#[test]
fn environment_carries_over_between_runs() {
    let interpreter = Interpreter::new();
    let env = Environment::new();
    run_source("let add = fn(a, b) { a + b };", &interpreter, &env);
    match run_source("add(2, 3)", &interpreter, &env) {
        Outcome::Value(value) => assert_eq!(value, Object::Integer(5)),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn repl_echoes_results_and_keeps_bindings() {
    let output = session("let a = 5;\na * 2\n\nlet b = a +;\nb\n");
    let expected = [
        PROMPT.to_string(),
        format!("{PROMPT}10\n"),
        PROMPT.to_string(),
        format!("{PROMPT}parser errors:\n\tno prefix parse function for ; found\n"),
        format!("{PROMPT}ERROR: identifier not found: b\n"),
        format!("{PROMPT}\n"),
    ]
    .concat();
    assert_eq!(output, expected);
}

#[test]
fn repl_survives_runtime_errors() {
    let output = session("missing\n1 + 1\n");
    assert_eq!(
        output,
        format!("{PROMPT}ERROR: identifier not found: missing\n{PROMPT}2\n{PROMPT}\n")
    );
}

#[test]
fn puts_goes_to_the_print_handler_not_the_echo() {
    let output = session("puts(\"hi\")\n");
    assert_eq!(output, format!("{PROMPT}null\n{PROMPT}\n"));
}

#[test]
fn missing_file_message() {
    assert_eq!(
        read_file("/nonexistent/program.mk"),
        Err("cannot find file '/nonexistent/program.mk'".to_string())
    );
}
