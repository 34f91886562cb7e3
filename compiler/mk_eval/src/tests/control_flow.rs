use pretty_assertions::assert_eq;

use super::run;
use crate::Object;

#[test]
fn if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", Object::Integer(10)),
        ("if (false) { 10 }", Object::Null),
        ("if (1) { 10 }", Object::Integer(10)),
        ("if (0) { 10 }", Object::Integer(10)),
        ("if (1 < 2) { 10 }", Object::Integer(10)),
        ("if (1 > 2) { 10 }", Object::Null),
        ("if (1 > 2) { 10 } else { 20 }", Object::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Object::Integer(10)),
        ("if (true) { }", Object::Null),
        ("let x = if (false) { 1 }; x", Object::Null),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "{source}");
    }
}

#[test]
fn return_statements() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("if (10 > 1) { return 10; }", 10),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
        ("let f = fn(x) { return x; x + 10; }; f(10);", 10),
        (
            "let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
            20,
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Object::Integer(expected), "{source}");
    }
}

#[test]
fn bare_return_yields_null() {
    assert_eq!(run("return;"), Object::Null);
    assert_eq!(run("let f = fn() { return; 5 }; f()"), Object::Null);
}

#[test]
fn return_stops_only_the_innermost_function() {
    let source = "
        let inner = fn() { return 1; 100 };
        let outer = fn() { let x = inner(); x + 1 };
        outer();
    ";
    assert_eq!(run(source), Object::Integer(2));
}

#[test]
fn top_level_return_ends_program() {
    assert_eq!(run("let a = 1; return a; let a = 2; a"), Object::Integer(1));
}
