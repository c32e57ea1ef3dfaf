use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser {
    /// Parses one declaration, recovering from any syntax error inside it.
    ///
    /// On error the problem is recorded, tokens are skipped up to the next
    /// statement boundary and `None` is returned.
    pub fn declaration(&mut self) -> Option<Statement> {
        let result = if self.matches(&[TokenKind::Var]) {
            self.var_declaration()
        } else if self.matches(&[TokenKind::Fun]) {
            self.function()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.report(error);
                self.synchronize();
                None
            },
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Statement> {
        let (name, location) = self.consume_identifier("Expected variable name.")?;
        let initializer = if self.matches(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expected ';' after variable declaration.")?;

        Ok(Statement::Var { name,
                            initializer,
                            location })
    }

    /// Parses `name(params) { body }` after the `fun` keyword.
    fn function(&mut self) -> ParseResult<Statement> {
        let (name, location) = self.consume_identifier("Expected function name.")?;
        self.consume(TokenKind::LeftParen, "Expected '(' after function name.")?;

        let params = self.comma_separated(TokenKind::RightParen,
                                          |max, location| ParseError::TooManyParameters { max, location },
                                          |parser| {
                                              parser.consume_identifier("Expected parameter name.")
                                                    .map(|(name, _)| name)
                                          })?;
        self.consume(TokenKind::RightParen, "Expected ')' after parameters.")?;

        self.consume(TokenKind::LeftBrace, "Expected '{' before function body.")?;
        let body = self.block()?;

        Ok(Statement::Function(Rc::new(FunctionDecl { name,
                                                      params,
                                                      body,
                                                      location })))
    }

    fn statement(&mut self) -> ParseResult<Statement> {
        if self.matches(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.matches(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.matches(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.matches(&[TokenKind::LeftBrace]) {
            return Ok(Statement::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn if_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // `else` binds to the nearest `if`.
        let else_branch = if self.matches(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch })
    }

    fn while_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Statement::While { condition, body })
    }

    /// Parses a `for` loop and lowers it to an equivalent `while`.
    ///
    /// `for (init; cond; step) body` becomes
    /// `{ init; while (cond) { body; step; } }`, with a missing condition
    /// replaced by `true`. The outer block is only added when there is an
    /// initialiser, and the inner one only when there is a step.
    fn for_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]) {
            None
        } else if self.matches(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expected ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expected ')' after for clauses.")?;

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            body = Statement::Block(vec![body, Statement::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(LiteralValue::Bool(true)));
        body = Statement::While { condition,
                                  body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Statement::Block(vec![initializer, body]);
        }
        Ok(body)
    }

    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Statement::Expression(expr))
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ParseError, interpreter::{lexer::tokenize, parser::parse}};

    fn parse_ok(source: &str) -> Vec<String> {
        let (tokens, _) = tokenize(source);
        let (statements, errors) = parse(tokens);
        assert!(errors.is_empty(), "{errors:?}");
        statements.iter().map(ToString::to_string).collect()
    }

    fn parse_errors(source: &str) -> Vec<ParseError> {
        let (tokens, _) = tokenize(source);
        parse(tokens).1
    }

    #[test]
    fn var_with_and_without_initializer() {
        assert_eq!(parse_ok("var a; var b = 1 + 2;"), ["(var a)", "(var b (+ 1 2))"]);
    }

    #[test]
    fn for_with_all_clauses() {
        assert_eq!(parse_ok("for (var i = 0; i < 3; i = i + 1) print(i);"),
                   ["(block (var i 0) (while (< i 3) (block (; (call print i)) (; (= i (+ i \
                     1))))))"]);
    }

    #[test]
    fn for_with_no_clauses_loops_on_true() {
        assert_eq!(parse_ok("for (;;) x;"), ["(while true (; x))"]);
    }

    #[test]
    fn for_with_expression_initializer() {
        assert_eq!(parse_ok("for (i = 0; i < 1;) {}"),
                   ["(block (; (= i 0)) (while (< i 1) (block)))"]);
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        assert_eq!(parse_ok("if (a) if (b) x; else y;"), ["(if a (if b (; x) (; y)))"]);
    }

    #[test]
    fn while_loop() {
        assert_eq!(parse_ok("while (n > 0) n = n - 1;"), ["(while (> n 0) (; (= n (- n 1))))"]);
    }

    #[test]
    fn function_declaration() {
        assert_eq!(parse_ok("fun add(a, b) { a + b; }"), ["(fun add (a b) (; (+ a b)))"]);
        assert_eq!(parse_ok("fun nothing() {}"), ["(fun nothing ())"]);
    }

    #[test]
    fn too_many_parameters_reported_once() {
        let params: Vec<String> = (0..300).map(|i| format!("p{i}")).collect();
        let source = format!("fun f({}) {{}}", params.join(", "));
        let (tokens, _) = tokenize(&source);
        let (statements, errors) = parse(tokens);

        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ParseError::TooManyParameters { max: 255, .. }));
    }

    #[test]
    fn missing_paren_after_if() {
        let errors = parse_errors("if a) x;");
        assert_eq!(errors[0].to_string(),
                   "Error on line 1, column 4 at 'a': Expected '(' after 'if'.");
    }
}
