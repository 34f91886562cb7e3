//! Array and hash literals, and the shared expression-list rule.

use mk_ir::{Expr, ExprKind, TokenKind};

use crate::precedence::Precedence;
use crate::Parser;

impl Parser<'_> {
    /// Comma-separated expressions closed by `end`. The current token is
    /// the opening delimiter; on success it is `end`.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();
        if self.peek_is(end) {
            self.advance();
            return Some(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(list)
    }

    /// `[ <expr>, ... ]`
    pub(crate) fn parse_array_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::new(ExprKind::Array(elements), token))
    }

    /// `{ <key>: <value>, ... }`. Pairs stay in source order.
    pub(crate) fn parse_hash_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Some(Expr::new(ExprKind::Hash(pairs), token))
    }
}
