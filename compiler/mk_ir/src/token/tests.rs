use super::*;

#[test]
fn test_kind_names_match_diagnostic_tags() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
}

#[test]
fn test_token_debug_shows_kind_literal_and_span() {
    let token = Token::new(TokenKind::Ident, "five", Span::new(4, 8));
    assert_eq!(format!("{token:?}"), "IDENT \"five\" @ 4..8");
    assert!(token.is(TokenKind::Ident));
}

#[test]
fn test_dummy_token_has_dummy_span() {
    let token = Token::dummy(TokenKind::Plus, "+");
    assert_eq!(token.span, Span::DUMMY);
    assert_eq!(token.literal, "+");
}
