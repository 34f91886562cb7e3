//! Pratt parser for Monkey.
//!
//! The parser pulls tokens from a [`Lexer`] with one token of lookahead and
//! builds a [`Program`]. It never stops at the first problem: each failure is
//! recorded as a [`ParseError`], the parser resynchronizes on the next
//! statement boundary, and parsing continues. Callers check
//! [`Parser::errors`] (or [`ParseResult::has_errors`]) before evaluating.

mod error;
mod grammar;
mod precedence;
mod recovery;

pub use error::{ParseError, ParseErrorKind};

use mk_ir::{Program, Token, TokenKind};
use mk_lexer::Lexer;
use precedence::Precedence;

/// Parser state: the token stream plus the current and next token.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse statements until end of input.
    ///
    /// Always returns a program; statements that failed to parse are left out
    /// and their errors recorded.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => self.synchronize(),
            }
            self.advance();
        }
        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        Program::new(statements)
    }

    #[inline]
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    #[inline]
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the next token is `kind`; otherwise record an error and
    /// return `None` so the caller can bail out with `?`.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.advance();
            Some(())
        } else {
            self.error_unexpected_peek(kind);
            None
        }
    }

    fn error_unexpected_peek(&mut self, expected: TokenKind) {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.peek.kind,
            },
            self.peek.span,
        );
        self.push_error(error);
    }

    /// Record that `expected` was needed where the current token stands.
    fn error_unexpected_current(&mut self, expected: TokenKind) {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.current.kind,
            },
            self.current.span,
        );
        self.push_error(error);
    }

    fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, span = %error.span, "parse error");
        self.errors.push(error);
    }

    #[inline]
    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    #[inline]
    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}

/// Outcome of parsing a whole source text.
#[derive(Debug)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse `source` in one step.
pub fn parse(source: &str) -> ParseResult {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    ParseResult {
        program,
        errors: parser.into_errors(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
mod tests;
