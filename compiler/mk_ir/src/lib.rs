//! Shared syntax types for the Monkey interpreter.
//!
//! Everything the front-end produces lives here: byte [`Span`]s, lexical
//! [`Token`]s, and the syntax tree rooted at [`Program`]. The lexer, the
//! parser, and the evaluator all depend on this crate and on nothing above it.
//!
//! Every tree node implements `Display` with a canonical rendering. The
//! rendering is fully parenthesized and re-parses to a structurally equal
//! tree, so it doubles as a debugging aid and as a round-trip oracle.

pub mod ast;
mod span;
pub mod token;

pub use ast::{
    BinaryOp, BlockStatement, Expr, ExprKind, FunctionLiteral, Identifier, Node, Program, Stmt,
    StmtKind, UnaryOp,
};
pub use span::Span;
pub use token::{Token, TokenKind};
