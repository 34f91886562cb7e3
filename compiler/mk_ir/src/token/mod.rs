//! Lexical tokens.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was cut
//! from and its byte [`Span`]. Literal payloads (identifier names, integer
//! digits, string contents) stay as text in `literal`; the parser decides
//! how to interpret them.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use super::Span;

/// A token with its source text and span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. For strings this excludes the quotes.
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Token not tied to any source position, for hand-built trees.
    pub fn dummy(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token::new(kind, literal, Span::DUMMY)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.kind, self.literal, self.span)
    }
}

#[cfg(test)]
mod tests;
