use pretty_assertions::assert_eq;

use super::{error_message, inspect, run, run_with_output};
use crate::Object;

#[test]
fn len() {
    assert_eq!(run(r#"len("")"#), Object::Integer(0));
    assert_eq!(run(r#"len("four")"#), Object::Integer(4));
    assert_eq!(run(r#"len("hello world")"#), Object::Integer(11));
    assert_eq!(run("len([1, 2, 3])"), Object::Integer(3));
    assert_eq!(
        error_message("len(1)"),
        "argument to `len` not supported, got INTEGER"
    );
    assert_eq!(
        error_message(r#"len("one", "two")"#),
        "wrong number of arguments. got=2, want=1"
    );
}

#[test]
fn array_builtins() {
    assert_eq!(run("first([1, 2, 3])"), Object::Integer(1));
    assert_eq!(run("first([])"), Object::Null);
    assert_eq!(run("last([1, 2, 3])"), Object::Integer(3));
    assert_eq!(run("last([])"), Object::Null);
    assert_eq!(inspect("rest([1, 2, 3])"), "[2, 3]");
    assert_eq!(inspect("rest(rest(rest([1, 2, 3])))"), "[]");
    assert_eq!(run("rest([])"), Object::Null);
    assert_eq!(inspect("push([], 1)"), "[1]");
    assert_eq!(
        error_message("first(1)"),
        "argument to `first` must be ARRAY, got INTEGER"
    );
    assert_eq!(
        error_message("push(1, 1)"),
        "argument to `push` must be ARRAY, got INTEGER"
    );
}

#[test]
fn push_and_rest_do_not_mutate() {
    assert_eq!(inspect("let a = [1]; let b = push(a, 2); [a, b]"), "[[1], [1, 2]]");
    assert_eq!(inspect("let a = [1, 2]; rest(a); a"), "[1, 2]");
}

#[test]
fn puts_writes_each_argument_on_its_own_line() {
    let (value, output) = run_with_output(r#"puts("hello", 1, [true]); puts();"#);
    assert_eq!(value, Object::Null);
    assert_eq!(output, "hello\n1\n[true]\n");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(run("let len = fn(x) { 42 }; len([1])"), Object::Integer(42));
}

#[test]
fn builtins_are_values() {
    assert_eq!(inspect("len"), "builtin function");
    assert_eq!(run("let l = len; l([1, 2])"), Object::Integer(2));
}
