//! Raw token definitions for the logos-generated scanner.

use logos::Logos;

/// Token as recognized by logos, before keyword resolution and literal
/// extraction.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    // Operators
    #[token("==")]
    EqEq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Literals. Strings have no escapes; an unclosed string runs to end of input.
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*"?"#)]
    String,

    /// Letters and underscores only; keywords are resolved afterwards.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
}
