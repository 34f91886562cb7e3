use pretty_assertions::assert_eq;

use super::{error_message, inspect, run};
use crate::Object;

#[test]
fn array_literals() {
    assert_eq!(inspect("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");
    assert_eq!(inspect("[]"), "[]");
    assert_eq!(inspect(r#"[1, "two", [true]]"#), "[1, two, [true]]");
}

#[test]
fn array_indexing() {
    let cases = [
        ("[1, 2, 3][0]", Object::Integer(1)),
        ("[1, 2, 3][1]", Object::Integer(2)),
        ("[1, 2, 3][2]", Object::Integer(3)),
        ("let i = 0; [1][i];", Object::Integer(1)),
        ("[1, 2, 3][1 + 1];", Object::Integer(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", Object::Integer(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Object::Integer(6),
        ),
        ("[1, 2, 3][3]", Object::Null),
        ("[1, 2, 3][-1]", Object::Null),
        ("[][0]", Object::Null),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "{source}");
    }
}

#[test]
fn hash_literals() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    assert_eq!(
        inspect(source),
        "{one: 1, two: 2, three: 3, 4: 4, true: 5, false: 6}"
    );
    assert_eq!(inspect("{}"), "{}");
}

#[test]
fn duplicate_hash_keys_keep_last_value() {
    assert_eq!(inspect(r#"{"a": 1, "b": 2, "a": 3}"#), "{a: 3, b: 2}");
}

#[test]
fn hash_indexing() {
    let cases = [
        (r#"{"foo": 5}["foo"]"#, Object::Integer(5)),
        (r#"{"foo": 5}["bar"]"#, Object::Null),
        (r#"let key = "foo"; {"foo": 5}[key]"#, Object::Integer(5)),
        (r#"{}["foo"]"#, Object::Null),
        ("{5: 5}[5]", Object::Integer(5)),
        ("{true: 5}[true]", Object::Integer(5)),
        ("{false: 5}[false]", Object::Integer(5)),
        ("{1: 5}[true]", Object::Null),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), expected, "{source}");
    }
}

#[test]
fn unusable_hash_keys() {
    assert_eq!(
        error_message(r#"{"name": "Monkey"}[fn(x) { x }];"#),
        "unusable as hash key: FUNCTION"
    );
    assert_eq!(
        error_message("{[1]: 2}"),
        "unusable as hash key: ARRAY"
    );
}

#[test]
fn index_on_unsupported_kind() {
    assert_eq!(error_message("1[0]"), "index operator not supported: INTEGER");
    assert_eq!(error_message(r#""abc"[0]"#), "index operator not supported: STRING");
    assert_eq!(
        error_message(r#"[1, 2]["a"]"#),
        "index operator not supported: ARRAY"
    );
}
