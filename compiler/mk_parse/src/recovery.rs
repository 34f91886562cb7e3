//! Error recovery.
//!
//! After a statement fails to parse, skip ahead so the next statement starts
//! on a plausible boundary instead of producing a cascade of follow-on
//! errors from the leftovers of the broken one.

use mk_ir::TokenKind;

use crate::Parser;

/// Tokens that may begin a fresh statement or close the enclosing block.
const STATEMENT_BOUNDARY: [TokenKind; 4] = [
    TokenKind::Let,
    TokenKind::Return,
    TokenKind::RBrace,
    TokenKind::Eof,
];

impl Parser<'_> {
    /// Advance until the current token is a `;` or the `}` closing the
    /// enclosing block, or the next token starts a new statement, closes a
    /// block, or ends the input.
    ///
    /// Blocks opened while skipping are skipped whole, so their `;` and `}`
    /// do not count as boundaries. When this stops on a `}` the caller must
    /// not advance past it; otherwise the caller's usual `advance` lands on
    /// the next statement.
    pub(crate) fn synchronize(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon | TokenKind::RBrace if depth == 0 => break,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            if depth == 0 && STATEMENT_BOUNDARY.contains(&self.peek.kind) {
                break;
            }
            self.advance();
        }
        tracing::trace!(token = %self.current.kind, "resynchronized");
    }
}
