//! Lexer for Monkey source text, built on logos.
//!
//! [`Lexer`] hands out one [`Token`] per call to [`Lexer::next_token`] and
//! keeps returning `Eof` once the input is exhausted. Whitespace is skipped.
//! Anything logos cannot match becomes an `Illegal` token carrying the
//! offending text; the lexer itself never fails. An illegal token spans one
//! whole UTF-8 character, so its literal is always valid text.

mod keywords;
mod raw_token;

use logos::Logos;
use mk_ir::{Span, Token, TokenKind};
use raw_token::RawToken;

pub use keywords::lookup_ident;

/// Pull-based tokenizer over a borrowed source string.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// Set once `Eof` has been yielded through the iterator.
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            exhausted: false,
        }
    }

    /// Next token. Returns `Eof` (with an empty literal) at end of input,
    /// and again on every later call.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.raw.next() else {
            return self.eof();
        };
        let range = self.raw.span();
        let span = Span::from_range(range.clone());
        // `get` rather than indexing: an error span may not sit on a char boundary.
        let slice = self.source.get(range).unwrap_or_default();

        match result {
            Ok(raw) => convert(raw, slice, span),
            Err(()) => {
                tracing::trace!(%span, text = slice, "illegal character");
                Token::new(TokenKind::Illegal, slice, span)
            }
        }
    }

    fn eof(&self) -> Token {
        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        Token::new(TokenKind::Eof, "", Span::point(end))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(token)
    }
}

/// Lex a whole source text, `Eof` included.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn convert(raw: RawToken, slice: &str, span: Span) -> Token {
    let kind = match raw {
        RawToken::String => {
            let body = slice.strip_prefix('"').unwrap_or(slice);
            let content = body.strip_suffix('"').unwrap_or(body);
            return Token::new(TokenKind::String, content, span);
        }
        RawToken::Ident => keywords::lookup_ident(slice),
        RawToken::Int => TokenKind::Int,
        RawToken::EqEq => TokenKind::Eq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Token::new(kind, slice, span)
}
