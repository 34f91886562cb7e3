use pretty_assertions::assert_eq;

use super::{error_message, run_with_output};

#[test]
fn error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        (r#""a" < "b""#, "unknown operator: STRING < STRING"),
        (r#""a" + 1"#, "type mismatch: STRING + INTEGER"),
        ("true < false", "unknown operator: BOOLEAN < BOOLEAN"),
        ("1 / 0", "division by zero"),
        ("5(1)", "not a function: INTEGER"),
        ("fn(x) { x }()", "wrong number of arguments. got=0, want=1"),
        ("fn() { 1 }(1, 2)", "wrong number of arguments. got=2, want=0"),
    ];
    for (source, expected) in cases {
        assert_eq!(error_message(source), expected, "{source}");
    }
}

#[test]
fn error_stops_the_whole_program() {
    let (value, output) = run_with_output(r#"puts("before"); missing; puts("after")"#);
    assert!(value.is_error());
    assert_eq!(output, "before\n");
}

#[test]
fn error_inside_call_argument_stops_call() {
    let (value, output) = run_with_output(r#"let f = fn(x) { puts("called") }; f(1 / 0)"#);
    assert_eq!(value.to_string(), "ERROR: division by zero");
    assert_eq!(output, "");
}

#[test]
fn error_inside_function_propagates_out() {
    assert_eq!(
        error_message("let f = fn() { undefined_name }; let x = f(); 10"),
        "identifier not found: undefined_name"
    );
}

#[test]
fn left_operand_error_wins() {
    assert_eq!(error_message("a + b"), "identifier not found: a");
}

#[test]
fn error_in_condition_skips_branches() {
    let (value, output) =
        run_with_output(r#"if (nope) { puts("then") } else { puts("else") }"#);
    assert_eq!(value.to_string(), "ERROR: identifier not found: nope");
    assert_eq!(output, "");
}
