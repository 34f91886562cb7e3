//! Expression parsing: the Pratt loop and its prefix/infix rules.

use std::rc::Rc;

use mk_ir::{BinaryOp, Expr, ExprKind, FunctionLiteral, Identifier, TokenKind, UnaryOp};
use mk_stack::ensure_sufficient_stack;

use crate::precedence::Precedence;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than
    /// `precedence`. The current token must start the expression; on return
    /// it is the expression's last token.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;
        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix(left)?;
        }
        Some(left)
    }

    /// Dispatch on the current token in prefix position.
    fn parse_prefix(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let kind = match token.kind {
            TokenKind::Ident => ExprKind::Ident(token.literal.clone()),
            TokenKind::String => ExprKind::Str(token.literal.clone()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Int => return self.parse_integer_literal(),
            TokenKind::Bang | TokenKind::Minus => return self.parse_prefix_expression(),
            TokenKind::LParen => return self.parse_grouped_expression(),
            TokenKind::If => return self.parse_if_expression(),
            TokenKind::Function => return self.parse_function_literal(),
            TokenKind::LBracket => return self.parse_array_literal(),
            TokenKind::LBrace => return self.parse_hash_literal(),
            other => {
                self.push_error(ParseError::new(
                    ParseErrorKind::NoPrefixParseFn(other),
                    token.span,
                ));
                return None;
            }
        };
        Some(Expr::new(kind, token))
    }

    /// Dispatch on the current token in infix position.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_index_expression(left),
            kind => {
                let op = BinaryOp::from_token_kind(kind)?;
                self.parse_infix_expression(op, left)
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        if let Ok(value) = token.literal.parse::<i64>() {
            Some(Expr::new(ExprKind::Int(value), token))
        } else {
            self.push_error(ParseError::new(
                ParseErrorKind::InvalidInteger(token.literal.clone()),
                token.span,
            ));
            None
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let op = UnaryOp::from_token_kind(token.kind)?;
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::new(
            ExprKind::Prefix {
                op,
                right: Box::new(right),
            },
            token,
        ))
    }

    fn parse_infix_expression(&mut self, op: BinaryOp, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            token,
        ))
    }

    /// `( <expr> )`. Grouping leaves no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    /// `if ( <expr> ) { ... } [else { ... }]`
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            token,
        ))
    }

    /// `fn ( <params> ) { ... }`
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();
        let literal = FunctionLiteral {
            token: token.clone(),
            parameters,
            body,
        };
        Some(Expr::new(ExprKind::Function(Rc::new(literal)), token))
    }

    /// Comma-separated identifiers up to `)`; current token is `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.current.clone()));
        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.current.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    /// `<callee> ( <args> )`; current token is `(`.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::new(
            ExprKind::Call {
                function: Box::new(function),
                arguments,
            },
            token,
        ))
    }

    /// `<left> [ <index> ]`; current token is `[`.
    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        Some(Expr::new(
            ExprKind::Index {
                left: Box::new(left),
                index: Box::new(index),
            },
            token,
        ))
    }
}
