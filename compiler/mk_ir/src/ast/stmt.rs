//! Statement nodes.

use super::{Expr, Identifier};
use crate::Token;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// First token of the statement.
    pub token: Token,
}

impl Stmt {
    pub fn new(kind: StmtKind, token: Token) -> Self {
        Stmt { kind, token }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Identifier, value: Expr },
    /// `return value;` or a bare `return;`
    Return(Option<Expr>),
    /// An expression used as a statement.
    Expr(Expr),
}

/// Brace-delimited statement sequence: function bodies and `if` arms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token: Token,
    pub statements: Vec<Stmt>,
}
