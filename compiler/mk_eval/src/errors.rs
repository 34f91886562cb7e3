//! Evaluation errors.
//!
//! Every runtime failure is one of these variants. The evaluator threads
//! them through `Result` and `?`; at the public boundary they become
//! [`Object::Error`](crate::Object::Error) values.

use mk_ir::{BinaryOp, UnaryOp};

use crate::object::ObjectKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),

    /// Infix operator applied to operands of different kinds.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: ObjectKind,
        op: BinaryOp,
        right: ObjectKind,
    },

    /// Infix operator not defined for this (same-kind) operand pair.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: ObjectKind,
        op: BinaryOp,
        right: ObjectKind,
    },

    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: UnaryOp, operand: ObjectKind },

    #[error("division by zero")]
    DivisionByZero,

    #[error("not a function: {0}")]
    NotAFunction(ObjectKind),

    #[error("index operator not supported: {0}")]
    IndexNotSupported(ObjectKind),

    #[error("unusable as hash key: {0}")]
    UnusableHashKey(ObjectKind),

    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },

    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: ObjectKind,
    },

    #[error("argument to `{builtin}` must be ARRAY, got {got}")]
    ExpectedArray {
        builtin: &'static str,
        got: ObjectKind,
    },
}

pub type EvalResult<T = crate::Object> = Result<T, EvalError>;

/// Fail with [`EvalError::WrongArgumentCount`] unless `args` has `want` items.
pub fn check_arity<T>(args: &[T], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(EvalError::WrongArgumentCount {
            got: args.len(),
            want,
        })
    }
}
