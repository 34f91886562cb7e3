//! Parse error types.

use mk_ir::{Span, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A specific token was required next and something else was found.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The token cannot start an expression.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// Integer literal outside the `i64` range.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

/// A parse error with the location of the offending token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Human-readable message; same as the `Display` output.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
