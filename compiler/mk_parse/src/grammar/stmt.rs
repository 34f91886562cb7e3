//! Statements and blocks.

use mk_ir::{BlockStatement, Identifier, Stmt, StmtKind, TokenKind};

use crate::precedence::Precedence;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        tracing::trace!(token = %self.current.kind, "statement");
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current.clone());
        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::new(StmtKind::Let { name, value }, token))
    }

    /// `return [<expr>] [;]`
    ///
    /// The value is omitted when `return` is directly followed by `;`, `}`,
    /// or the end of input.
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let bare = matches!(
            self.peek.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        );
        let value = if bare {
            None
        } else {
            self.advance();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        self.skip_optional_semicolon();
        Some(Stmt::new(StmtKind::Return(value), token))
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::new(StmtKind::Expr(expr), token))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Parse a `{ ... }` block; the current token must be `{`.
    ///
    /// Stops at the matching `}`. Hitting end of input first records a
    /// missing-brace error but still returns what was collected.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => {
                    self.synchronize();
                    // Already on this block's closing brace.
                    if self.current_is(TokenKind::RBrace) {
                        break;
                    }
                }
            }
            self.advance();
        }

        if self.current_is(TokenKind::Eof) {
            self.error_unexpected_current(TokenKind::RBrace);
        }
        BlockStatement { token, statements }
    }
}
