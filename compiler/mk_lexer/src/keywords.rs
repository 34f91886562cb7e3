//! Keyword resolution.

use mk_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text {
        "fn" => Some(TokenKind::Function),
        "let" => Some(TokenKind::Let),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Kind for an identifier-shaped word: a keyword kind or `Ident`.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}
