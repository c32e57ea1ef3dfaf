use std::fmt;

/// Every kind of token the scanner can produce.
///
/// Single-character punctuation, one-or-two character operators, literals,
/// keywords and the terminating `Eof` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    /// A name that is not a keyword.
    Identifier,
    /// A double-quoted string literal.
    String,
    /// A numeric literal.
    Number,

    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End of input. Always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the kinds that begin a declaration or statement.
    ///
    /// The parser stops discarding tokens at one of these while recovering
    /// from a syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::For
                 | Self::Fun
                 | Self::If
                 | Self::Return
                 | Self::Var
                 | Self::While)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Question => "QUESTION",
            Self::Colon => "COLON",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// The value a literal-bearing token carries, decoded once by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The spelling of an identifier.
    Identifier(String),
    /// The contents of a string literal, without the surrounding quotes.
    Str(String),
    /// The numeric value of a number literal.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A position in the source text.
///
/// Lines and columns are 1-based; `end_column` is exclusive. For tokens that
/// span several lines (multi-line strings) the location describes the line
/// the token starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Line number of the first character.
    pub line:       usize,
    /// Column of the first character.
    pub column:     usize,
    /// Column one past the last character on the starting line.
    pub end_column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize, end_column: usize) -> Self {
        Self { line,
               column,
               end_column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A single lexical unit.
///
/// Tokens are immutable once built. The literal value, if any, is computed
/// by the lexer when the token is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme:   String,
    /// The decoded value for identifiers, strings and numbers.
    pub literal:  Option<Literal>,
    /// Where the token starts.
    pub location: Location,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind,
                     lexeme: String,
                     literal: Option<Literal>,
                     location: Location)
                     -> Self {
        Self { kind,
               lexeme,
               literal,
               location }
    }

    /// The end-of-input marker placed after the last real token.
    #[must_use]
    pub const fn eof(location: Location) -> Self {
        Self::new(TokenKind::Eof, String::new(), None, location)
    }

    /// The identifier name, if this is an identifier token.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Identifier(name)) => Some(name),
            _ => None,
        }
    }

    /// The string contents, if this is a string token.
    #[must_use]
    pub fn string(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// The numeric value, if this is a number token.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match &self.literal {
            Some(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

/// Renders as `KIND lexeme literal`, the format used by the token dump.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}
