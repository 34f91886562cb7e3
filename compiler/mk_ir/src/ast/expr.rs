//! Expression nodes.

use std::rc::Rc;

use super::{BinaryOp, BlockStatement, UnaryOp};
use crate::{Span, Token};

/// A bound name, as it appears in `let` targets and parameter lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    /// Build from an `Ident` token; the name is the token's literal.
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }
}

/// Function literal: parameter names plus body.
///
/// Shared behind an `Rc` so closures can hold on to their definition
/// without cloning the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// Expression node.
///
/// `token` is the token the node starts with (the operator token for infix
/// and index forms, `(` for calls).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub token: Token,
}

impl Expr {
    pub fn new(kind: ExprKind, token: Token) -> Self {
        Expr { kind, token }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.token.span
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    Ident(String),
    Int(i64),
    Str(String),
    Bool(bool),
    Array(Vec<Expr>),
    /// Key/value pairs in source order.
    Hash(Vec<(Expr, Expr)>),
    Prefix {
        op: UnaryOp,
        right: Box<Expr>,
    },
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function(Rc<FunctionLiteral>),
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
}
