use crate::interpreter::token::TokenKind;

/// Reserved words and the token kinds they scan as.
///
/// The table is plain static data: it is never mutated and needs no
/// initialisation at runtime.
pub static KEYWORDS: &[(&str, TokenKind)] = &[("and", TokenKind::And),
                                              ("class", TokenKind::Class),
                                              ("else", TokenKind::Else),
                                              ("false", TokenKind::False),
                                              ("for", TokenKind::For),
                                              ("fun", TokenKind::Fun),
                                              ("if", TokenKind::If),
                                              ("nil", TokenKind::Nil),
                                              ("or", TokenKind::Or),
                                              ("return", TokenKind::Return),
                                              ("super", TokenKind::Super),
                                              ("this", TokenKind::This),
                                              ("true", TokenKind::True),
                                              ("var", TokenKind::Var),
                                              ("while", TokenKind::While)];

/// Looks up the keyword kind for an identifier spelling.
///
/// Returns `None` when the spelling is an ordinary identifier.
///
/// # Example
/// ```
/// use treelox::interpreter::{keyword::keyword_kind, token::TokenKind};
///
/// assert_eq!(keyword_kind("while"), Some(TokenKind::While));
/// assert_eq!(keyword_kind("whilst"), None);
/// ```
#[must_use]
pub fn keyword_kind(spelling: &str) -> Option<TokenKind> {
    KEYWORDS.iter()
            .find(|(word, _)| *word == spelling)
            .map(|(_, kind)| *kind)
}

/// Returns `true` if `spelling` is reserved.
#[must_use]
pub fn is_keyword(spelling: &str) -> bool {
    keyword_kind(spelling).is_some()
}
