use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser {
    /// Parses prefix `!` and `-`, which nest right to left.
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let token = self.previous();
            let op = match token.kind {
                TokenKind::Bang => UnaryOperator::Not,
                _ => UnaryOperator::Negate,
            };
            let location = token.location;
            let operand = self.unary()?;

            return Ok(Expr::Unary { op,
                                    operand: Box::new(operand),
                                    location });
        }

        self.call()
    }

    /// Parses a primary expression followed by any number of call suffixes,
    /// so `f(1)(2)` calls the result of `f(1)`.
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.matches(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let arguments = self.with_arguments_flag(true, |parser| {
                                parser.comma_separated(TokenKind::RightParen,
                                                       |max, location| {
                                                           ParseError::TooManyArguments { max,
                                                                                          location }
                                                       },
                                                       Self::expression)
                            })?;
        let location = self.consume(TokenKind::RightParen, "Expected ')' after arguments.")?
                           .location;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        location })
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();
        let expr = match token.kind {
            TokenKind::False => Expr::literal(false),
            TokenKind::True => Expr::literal(true),
            TokenKind::Nil => Expr::Literal(LiteralValue::Null),
            TokenKind::Number => Expr::literal(token.number().unwrap_or_default()),
            TokenKind::String => Expr::literal(token.string().unwrap_or_default()),
            TokenKind::Identifier => {
                Expr::Variable { name:     token.identifier().unwrap_or(&token.lexeme).to_string(),
                                 location: token.location, }
            },
            TokenKind::LeftParen => return self.group(),
            _ => return Err(self.error_at_current("Expected expression.")),
        };

        self.advance();
        Ok(expr)
    }

    /// `( expression )`. The comma operator is available again inside the
    /// parentheses even when they appear in an argument list.
    fn group(&mut self) -> ParseResult<Expr> {
        self.advance();
        let inner = self.with_arguments_flag(false, Self::expression)?;
        self.consume(TokenKind::RightParen, "Expected ')' after expression.")?;
        Ok(Expr::Group(Box::new(inner)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::parse, token::Location},
    };

    fn single_expr(source: &str) -> (Option<Expr>, Vec<ParseError>) {
        let (tokens, _) = tokenize(source);
        let (statements, errors) = parse(tokens);
        let expr = statements.into_iter().next().and_then(|statement| match statement {
                                                     Statement::Expression(expr) => Some(expr),
                                                     _ => None,
                                                 });
        (expr, errors)
    }

    #[test]
    fn prefix_operators_nest() {
        let (expr, _) = single_expr("!-x;");
        assert_eq!(expr.map(|e| e.to_string()), Some("(! (- x))".into()));
    }

    #[test]
    fn unary_location_is_the_operator() {
        let (expr, _) = single_expr("  -a;");
        let Some(Expr::Unary { location, .. }) = expr else {
            panic!("expected a unary expression");
        };
        assert_eq!(location, Location::new(1, 3, 4));
    }

    #[test]
    fn literals() {
        let (expr, _) = single_expr("\"hi\";");
        assert_eq!(expr.map(|e| e.to_string()), Some("\"hi\"".into()));
        let (expr, _) = single_expr("nil;");
        assert_eq!(expr.map(|e| e.to_string()), Some("nil".into()));
        let (expr, _) = single_expr("2.5;");
        assert_eq!(expr.map(|e| e.to_string()), Some("2.5".into()));
    }

    #[test]
    fn arguments_are_not_comma_expressions() {
        let (expr, errors) = single_expr("f(a, b, c);");
        assert!(errors.is_empty());
        let Some(Expr::Call { arguments, .. }) = expr else {
            panic!("expected a call");
        };
        assert_eq!(arguments.len(), 3);
    }

    #[test]
    fn parentheses_restore_the_comma_operator() {
        let (expr, _) = single_expr("f((a, b), c);");
        assert_eq!(expr.map(|e| e.to_string()),
                   Some("(call f (group (, a b)) c)".into()));
    }

    #[test]
    fn comma_works_again_after_a_call() {
        let (expr, errors) = single_expr("g(1), 2;");
        assert!(errors.is_empty());
        assert_eq!(expr.map(|e| e.to_string()), Some("(, (call g 1) 2)".into()));
    }

    #[test]
    fn chained_calls() {
        let (expr, _) = single_expr("f(1)(2)();");
        assert_eq!(expr.map(|e| e.to_string()), Some("(call (call (call f 1) 2))".into()));
    }

    #[test]
    fn call_location_is_the_closing_paren() {
        let (expr, _) = single_expr("f(1 );");
        let Some(Expr::Call { location, .. }) = expr else {
            panic!("expected a call");
        };
        assert_eq!(location.column, 5);
    }

    #[test]
    fn too_many_arguments_reported_once() {
        let arguments = vec!["1"; 260].join(", ");
        let (expr, errors) = single_expr(&format!("f({arguments});"));

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ParseError::TooManyArguments { max: 255, .. }));
        let Some(Expr::Call { arguments, .. }) = expr else {
            panic!("the call is still built");
        };
        assert_eq!(arguments.len(), 260);
    }

    #[test]
    fn unclosed_group() {
        let (_, errors) = single_expr("(1 + 2;");
        assert_eq!(errors[0].to_string(),
                   "Error on line 1, column 7 at ';': Expected ')' after expression.");
    }
}
