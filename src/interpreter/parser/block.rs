use crate::{
    ast::Statement,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser {
    /// Parses declarations up to the closing `}`. The opening brace must
    /// already have been consumed.
    ///
    /// Errors inside the block are recovered from statement by statement, so
    /// only a missing `}` makes the whole block fail.
    pub fn block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }
        self.consume(TokenKind::RightBrace, "Expected '}' after block.")?;
        Ok(statements)
    }
}
