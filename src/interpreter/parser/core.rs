use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::token::{Location, Token, TokenKind},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Upper bound on call arguments and function parameters.
pub const MAX_ARGUMENTS: usize = 255;

/// A recursive-descent parser over a scanned token sequence.
///
/// The parser is best-effort: a malformed declaration is reported, skipped
/// and parsing resumes at the next statement boundary. Errors that do not
/// derail the grammar (an invalid assignment target, too many arguments) are
/// reported without any recovery at all.
pub struct Parser {
    tokens:       Vec<Token>,
    current:      usize,
    /// Set while parsing a call's argument list, where `,` separates
    /// arguments instead of acting as the comma operator.
    in_arguments: bool,
    errors:       Vec<ParseError>,
}

/// Parses a whole program.
///
/// Returns every statement that could be built together with every syntax
/// error encountered. A malformed statement contributes no node.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::tokenize, parser::parse};
///
/// let (tokens, _) = tokenize("var a = ; print(1);");
/// let (statements, errors) = parse(tokens);
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(statements.len(), 1);
/// assert_eq!(statements[0].to_string(), "(; (call print 1))");
/// ```
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Vec<Statement>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_program();
    (statements, parser.into_errors())
}

impl Parser {
    /// Creates a parser. An `Eof` token is appended if the sequence does not
    /// already end with one.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::eof(location));
        }
        Self { tokens,
               current: 0,
               in_arguments: false,
               errors: Vec::new() }
    }

    /// Parses declarations until the end of input.
    pub fn parse_program(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }
        statements
    }

    /// The syntax errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, yielding its recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Records an error without interrupting the current production.
    pub(in crate::interpreter::parser) fn report(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error");
        self.errors.push(error);
    }

    /// Runs `parse_with` with the argument-list flag set to `in_arguments`,
    /// restoring the previous setting afterwards whatever the outcome.
    pub(in crate::interpreter::parser) fn with_arguments_flag<T>(
        &mut self,
        in_arguments: bool,
        parse_with: impl FnOnce(&mut Self) -> ParseResult<T>)
        -> ParseResult<T> {
        let saved = std::mem::replace(&mut self.in_arguments, in_arguments);
        let result = parse_with(self);
        self.in_arguments = saved;
        result
    }

    pub(in crate::interpreter::parser) const fn in_arguments(&self) -> bool {
        self.in_arguments
    }

    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(in crate::interpreter::parser) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Moves past the current token and returns it. At the end of input the
    /// `Eof` token is returned and the cursor stays put.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &Token {
        if self.is_at_end() {
            return &self.tokens[self.current];
        }
        self.current += 1;
        &self.tokens[self.current - 1]
    }

    /// Consumes the current token if it is one of `kinds`.
    pub(in crate::interpreter::parser) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the given kind or fails with `message`.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &str)
                                                  -> ParseResult<&Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error_at_current(message))
    }

    /// Consumes an identifier, returning its name and location.
    pub(in crate::interpreter::parser) fn consume_identifier(&mut self,
                                                             message: &str)
                                                             -> ParseResult<(String, Location)> {
        let token = self.consume(TokenKind::Identifier, message)?;
        let name = token.identifier().unwrap_or(&token.lexeme).to_string();
        Ok((name, token.location))
    }

    /// Builds an error pointing at the current token.
    pub(in crate::interpreter::parser) fn error_at_current(&self, message: &str) -> ParseError {
        let token = self.peek();
        let found = if token.kind == TokenKind::Eof {
            "end".to_string()
        } else {
            format!("'{}'", token.lexeme)
        };
        ParseError::UnexpectedToken { message: message.to_string(),
                                      found,
                                      location: token.location }
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops right after a `;` or right before a keyword that begins a
    /// statement. Always consumes at least one token unless at the end.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        let from = self.peek().location;
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                break;
            }
            self.advance();
        }
        tracing::debug!(%from, to = %self.peek().location, "parser synchronised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse_source(source: &str) -> (Vec<String>, Vec<ParseError>) {
        let (tokens, lex_errors) = tokenize(source);
        assert!(lex_errors.is_empty());
        let (statements, errors) = parse(tokens);
        (statements.iter().map(ToString::to_string).collect(), errors)
    }

    #[test]
    fn empty_program() {
        let (statements, errors) = parse_source("");
        assert!(statements.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_eof_is_tolerated() {
        let mut parser = Parser::new(Vec::new());
        assert!(parser.parse_program().is_empty());
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn recovers_at_semicolon() {
        let (statements, errors) = parse_source("1 +; 2;");
        assert_eq!(statements, ["(; 2)"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(),
                   "Error on line 1, column 4 at ';': Expected expression.");
    }

    #[test]
    fn recovers_at_statement_keyword() {
        let (statements, errors) = parse_source("var = 3 var b = 2;");
        assert_eq!(statements, ["(var b 2)"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn every_bad_statement_is_reported() {
        let (statements, errors) = parse_source("a b; c d; e;");
        assert_eq!(statements, ["(; e)"]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn error_at_end_of_input_says_end() {
        let (_, errors) = parse_source("var x = 1");
        assert_eq!(errors[0].to_string(),
                   "Error on line 1, column 10 at end: Expected ';' after variable declaration.");
    }

    #[test]
    fn reserved_words_are_not_expressions() {
        let (statements, errors) = parse_source("return 1; this; print(2);");
        assert_eq!(statements, ["(; (call print 2))"]);
        assert_eq!(errors.len(), 2);
    }
}
