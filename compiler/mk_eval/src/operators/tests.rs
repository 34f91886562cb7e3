use pretty_assertions::assert_eq;

use super::*;
use crate::HashObject;

fn int(n: i64) -> Object {
    Object::Integer(n)
}

#[test]
fn integer_arithmetic() {
    assert_eq!(evaluate_binary(&int(7), &int(2), BinaryOp::Add), Ok(int(9)));
    assert_eq!(evaluate_binary(&int(7), &int(2), BinaryOp::Sub), Ok(int(5)));
    assert_eq!(evaluate_binary(&int(7), &int(2), BinaryOp::Mul), Ok(int(14)));
    assert_eq!(evaluate_binary(&int(7), &int(2), BinaryOp::Div), Ok(int(3)));
    assert_eq!(evaluate_binary(&int(-7), &int(2), BinaryOp::Div), Ok(int(-3)));
}

#[test]
fn integer_comparisons() {
    assert_eq!(evaluate_binary(&int(1), &int(2), BinaryOp::Lt), Ok(Object::TRUE));
    assert_eq!(evaluate_binary(&int(1), &int(2), BinaryOp::Gt), Ok(Object::FALSE));
    assert_eq!(evaluate_binary(&int(2), &int(2), BinaryOp::Eq), Ok(Object::TRUE));
    assert_eq!(evaluate_binary(&int(2), &int(2), BinaryOp::NotEq), Ok(Object::FALSE));
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(
        evaluate_binary(&int(i64::MAX), &int(1), BinaryOp::Add),
        Ok(int(i64::MIN))
    );
    assert_eq!(
        evaluate_binary(&int(i64::MIN), &int(-1), BinaryOp::Div),
        Ok(int(i64::MIN))
    );
    assert_eq!(evaluate_unary(UnaryOp::Neg, &int(i64::MIN)), Ok(int(i64::MIN)));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        evaluate_binary(&int(1), &int(0), BinaryOp::Div),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn string_operators() {
    let a = Object::string("foo");
    let b = Object::string("bar");
    assert_eq!(
        evaluate_binary(&a, &b, BinaryOp::Add),
        Ok(Object::string("foobar"))
    );
    assert_eq!(
        evaluate_binary(&a, &Object::string("foo"), BinaryOp::Eq),
        Ok(Object::TRUE)
    );
    assert_eq!(evaluate_binary(&a, &b, BinaryOp::NotEq), Ok(Object::TRUE));
    assert_eq!(
        evaluate_binary(&a, &b, BinaryOp::Sub).unwrap_err().to_string(),
        "unknown operator: STRING - STRING"
    );
}

#[test]
fn mismatch_versus_unknown_operator() {
    assert_eq!(
        evaluate_binary(&int(5), &Object::TRUE, BinaryOp::Add)
            .unwrap_err()
            .to_string(),
        "type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(
        evaluate_binary(&Object::TRUE, &Object::FALSE, BinaryOp::Add)
            .unwrap_err()
            .to_string(),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
}

#[test]
fn equality_falls_back_to_identity() {
    let array = Object::array(vec![int(1)]);
    let same = array.clone();
    let lookalike = Object::array(vec![int(1)]);
    assert_eq!(evaluate_binary(&array, &same, BinaryOp::Eq), Ok(Object::TRUE));
    assert_eq!(
        evaluate_binary(&array, &lookalike, BinaryOp::Eq),
        Ok(Object::FALSE)
    );
    assert_eq!(
        evaluate_binary(&array, &lookalike, BinaryOp::NotEq),
        Ok(Object::TRUE)
    );

    let hash = Object::hash(HashObject::new());
    assert_eq!(evaluate_binary(&hash, &hash.clone(), BinaryOp::Eq), Ok(Object::TRUE));
    assert_eq!(evaluate_binary(&Object::Null, &Object::Null, BinaryOp::Eq), Ok(Object::TRUE));
    assert_eq!(evaluate_binary(&int(1), &Object::TRUE, BinaryOp::Eq), Ok(Object::FALSE));
    assert_eq!(
        evaluate_binary(&Object::TRUE, &Object::TRUE, BinaryOp::Eq),
        Ok(Object::TRUE)
    );
}

#[test]
fn bang_uses_truthiness() {
    assert_eq!(evaluate_unary(UnaryOp::Not, &Object::TRUE), Ok(Object::FALSE));
    assert_eq!(evaluate_unary(UnaryOp::Not, &Object::Null), Ok(Object::TRUE));
    assert_eq!(evaluate_unary(UnaryOp::Not, &int(0)), Ok(Object::FALSE));
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Object::string("")),
        Ok(Object::FALSE)
    );
}

#[test]
fn negation_requires_integer() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &int(5)), Ok(int(-5)));
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &Object::TRUE)
            .unwrap_err()
            .to_string(),
        "unknown operator: -BOOLEAN"
    );
}
