//! Prefix and infix operator semantics.
//!
//! Direct match dispatch on the operand kinds. Integers and strings have
//! their own tables; every other pairing only supports `==`/`!=`, which
//! compare by identity (see [`Object::is_identical`]).

use mk_ir::{BinaryOp, UnaryOp};

use crate::{EvalError, EvalResult, Object};

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Object, right: &Object, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_binary(*a, *b, op),
        (Object::Str(a), Object::Str(b)) => eval_string_binary(a, b, op)
            .ok_or_else(|| unknown_binary_operator(left, right, op)),
        _ => match op {
            BinaryOp::Eq => Ok(Object::Boolean(left.is_identical(right))),
            BinaryOp::NotEq => Ok(Object::Boolean(!left.is_identical(right))),
            _ if left.kind() != right.kind() => Err(EvalError::TypeMismatch {
                left: left.kind(),
                op,
                right: right.kind(),
            }),
            _ => Err(unknown_binary_operator(left, right, op)),
        },
    }
}

/// Evaluate `op operand`.
pub fn evaluate_unary(op: UnaryOp, operand: &Object) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, _) => Ok(Object::Boolean(!operand.is_truthy())),
        (UnaryOp::Neg, Object::Integer(value)) => Ok(Object::Integer(value.wrapping_neg())),
        (UnaryOp::Neg, _) => Err(EvalError::UnknownPrefixOperator {
            op,
            operand: operand.kind(),
        }),
    }
}

/// Two's-complement wrapping arithmetic; only division can fail.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    Ok(match op {
        BinaryOp::Add => Object::Integer(a.wrapping_add(b)),
        BinaryOp::Sub => Object::Integer(a.wrapping_sub(b)),
        BinaryOp::Mul => Object::Integer(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Object::Integer(a.wrapping_div(b))
        }
        BinaryOp::Lt => Object::Boolean(a < b),
        BinaryOp::Gt => Object::Boolean(a > b),
        BinaryOp::Eq => Object::Boolean(a == b),
        BinaryOp::NotEq => Object::Boolean(a != b),
    })
}

/// Concatenation and value equality. `None` for unsupported operators.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Option<Object> {
    match op {
        BinaryOp::Add => Some(Object::string([a, b].concat())),
        BinaryOp::Eq => Some(Object::Boolean(a == b)),
        BinaryOp::NotEq => Some(Object::Boolean(a != b)),
        _ => None,
    }
}

fn unknown_binary_operator(left: &Object, right: &Object, op: BinaryOp) -> EvalError {
    EvalError::UnknownInfixOperator {
        left: left.kind(),
        op,
        right: right.kind(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests;
