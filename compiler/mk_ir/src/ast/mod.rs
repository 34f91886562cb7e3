//! Syntax tree.
//!
//! Nodes own their children and keep the token they were built from, so
//! diagnostics can point back into the source. Function literals sit behind
//! `Rc` because closure values share them with the tree.

mod display;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, FunctionLiteral, Identifier};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{BlockStatement, Stmt, StmtKind};

/// Root of a parsed source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Borrowed view over any evaluable node.
///
/// Lets consumers accept "a program, a statement, a block, or an expression"
/// through one entry point.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Stmt),
    Block(&'a BlockStatement),
    Expression(&'a Expr),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expression(expr)
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Program(p) => std::fmt::Display::fmt(p, f),
            Node::Statement(s) => std::fmt::Display::fmt(s, f),
            Node::Block(b) => std::fmt::Display::fmt(b, f),
            Node::Expression(e) => std::fmt::Display::fmt(e, f),
        }
    }
}
