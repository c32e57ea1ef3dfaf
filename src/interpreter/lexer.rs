use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        keyword::keyword_kind,
        token::{Literal, Location, Token, TokenKind},
    },
};

/// Raw scanner output produced by logos.
///
/// Whitespace, newlines and `//` comments are skipped here. Identifiers are
/// not yet split into keywords; that happens in [`tokenize`] through the
/// keyword table.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    /// Numeric literal tokens such as `42` or `3.14`. No exponents and no
    /// leading or trailing dot.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens; may span several lines.
    #[token("\"", lex_string)]
    Str(String),
    /// Identifier and keyword spellings such as `x` or `while`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
}

/// Error kinds raised from inside logos callbacks.
///
/// The default variant is what logos reports for input that matches no
/// pattern at all.
#[derive(Debug, Clone, Default, PartialEq)]
enum RawError {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    MalformedNumber,
}

/// Parses a numeric literal from the current token slice.
///
/// Digit runs too long to be finite as a double are rejected.
fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Result<f64, RawError> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RawError::MalformedNumber),
    }
}

/// Consumes a string literal after its opening quote.
///
/// Embedded newlines are kept verbatim. When no closing quote exists the
/// rest of the input is consumed so scanning ends cleanly.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, RawError> {
    let rest = lex.remainder();
    if let Some(end) = rest.find('"') {
        let contents = rest[..end].to_string();
        lex.bump(end + 1);
        Ok(contents)
    } else {
        lex.bump(rest.len());
        Err(RawError::UnterminatedString)
    }
}

/// Maps byte offsets to 1-based line and column numbers.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { starts }
    }

    fn location(&self, source: &str, span: &std::ops::Range<usize>) -> Location {
        let line = self.starts.partition_point(|&start| start <= span.start);
        let line_start = self.starts[line - 1];
        let column = source.get(line_start..span.start)
                           .map_or(span.start - line_start, |s| s.chars().count())
                           + 1;
        let width = source.get(span.clone())
                          .map_or(0, |s| s.split('\n').next().unwrap_or("").chars().count());
        Location::new(line, column, column + width)
    }
}

/// Scans `source` into a token sequence terminated by an `Eof` token.
///
/// Scanning never stops at a bad character: every problem is recorded in the
/// returned error list and the scan resumes right after the offending text.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let (tokens, errors) = tokenize("var x = 3.5; // trailing");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert!(errors.is_empty());
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert_eq!(tokens[3].number(), Some(3.5));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let location = index.location(source, &span);
        let lexeme = source.get(span).unwrap_or_default().to_string();

        match raw {
            Ok(raw) => {
                let token = classify(raw, lexeme, location);
                tracing::trace!(%token, line = location.line, column = location.column, "token");
                tokens.push(token);
            },
            Err(kind) => {
                let error = match kind {
                    RawError::UnexpectedCharacter => {
                        LexError::UnexpectedCharacter { character: lexeme,
                                                        location }
                    },
                    RawError::UnterminatedString => LexError::UnterminatedString { location },
                    RawError::MalformedNumber => LexError::MalformedNumber { lexeme, location },
                };
                tracing::debug!(%error, "lex error");
                errors.push(error);
            },
        }
    }

    let end = index.location(source, &(source.len()..source.len()));
    tokens.push(Token::eof(end));

    (tokens, errors)
}

/// Turns a raw logos token into a [`Token`], resolving keywords.
fn classify(raw: RawToken, lexeme: String, location: Location) -> Token {
    let (kind, literal) = match raw {
        RawToken::Number(value) => (TokenKind::Number, Some(Literal::Number(value))),
        RawToken::Str(contents) => (TokenKind::String, Some(Literal::Str(contents))),
        RawToken::Identifier(name) => match keyword_kind(&name) {
            Some(keyword) => (keyword, None),
            None => (TokenKind::Identifier, Some(Literal::Identifier(name))),
        },
        RawToken::LeftParen => (TokenKind::LeftParen, None),
        RawToken::RightParen => (TokenKind::RightParen, None),
        RawToken::LeftBrace => (TokenKind::LeftBrace, None),
        RawToken::RightBrace => (TokenKind::RightBrace, None),
        RawToken::Comma => (TokenKind::Comma, None),
        RawToken::Dot => (TokenKind::Dot, None),
        RawToken::Minus => (TokenKind::Minus, None),
        RawToken::Plus => (TokenKind::Plus, None),
        RawToken::Semicolon => (TokenKind::Semicolon, None),
        RawToken::Slash => (TokenKind::Slash, None),
        RawToken::Star => (TokenKind::Star, None),
        RawToken::Question => (TokenKind::Question, None),
        RawToken::Colon => (TokenKind::Colon, None),
        RawToken::BangEqual => (TokenKind::BangEqual, None),
        RawToken::Bang => (TokenKind::Bang, None),
        RawToken::EqualEqual => (TokenKind::EqualEqual, None),
        RawToken::Equal => (TokenKind::Equal, None),
        RawToken::GreaterEqual => (TokenKind::GreaterEqual, None),
        RawToken::Greater => (TokenKind::Greater, None),
        RawToken::LessEqual => (TokenKind::LessEqual, None),
        RawToken::Less => (TokenKind::Less, None),
    };

    Token::new(kind, lexeme, literal, location)
}
