use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser {
    /// Parses an expression at the lowest precedence level.
    ///
    /// Precedence, from loosest to tightest: assignment, comma, `or`, `and`,
    /// ternary, equality, comparison, term, factor, unary, call, primary.
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// Right-associative assignment.
    ///
    /// The left side is parsed as an ordinary expression first; if it turns
    /// out not to be a plain variable the error is recorded and the left
    /// side is returned as is, without entering recovery.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.comma()?;

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous().location;
            let value = self.assignment()?;

            if let Expr::Variable { name, location } = expr {
                return Ok(Expr::Assign { name,
                                         value: Box::new(value),
                                         location });
            }
            self.report(ParseError::InvalidAssignmentTarget { location: equals });
        }

        Ok(expr)
    }

    /// The comma operator. Disabled while parsing call arguments.
    fn comma(&mut self) -> ParseResult<Expr> {
        let mut expr = self.or()?;

        while !self.in_arguments() && self.matches(&[TokenKind::Comma]) {
            let location = self.previous().location;
            let right = self.or()?;
            expr = Expr::Binary { left: Box::new(expr),
                                  right: Box::new(right),
                                  op: BinaryOperator::Comma,
                                  location };
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;
        while self.matches(&[TokenKind::Or]) {
            let right = self.and()?;
            expr = Expr::Logical { left:  Box::new(expr),
                                   right: Box::new(right),
                                   op:    LogicalOperator::Or, };
        }
        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.ternary()?;
        while self.matches(&[TokenKind::And]) {
            let right = self.ternary()?;
            expr = Expr::Logical { left:  Box::new(expr),
                                   right: Box::new(right),
                                   op:    LogicalOperator::And, };
        }
        Ok(expr)
    }

    /// `condition ? then : else`. All three operands are parsed at equality
    /// level, so ternaries only nest inside parentheses.
    fn ternary(&mut self) -> ParseResult<Expr> {
        let condition = self.equality()?;
        if !self.matches(&[TokenKind::Question]) {
            return Ok(condition);
        }

        let then_branch = self.equality()?;
        self.consume(TokenKind::Colon, "Expected ':' after then branch of conditional expression.")?;
        let else_branch = self.equality()?;

        Ok(Expr::Ternary { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch), })
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::BangEqual, TokenKind::EqualEqual], Self::comparison)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Greater,
                                TokenKind::GreaterEqual,
                                TokenKind::Less,
                                TokenKind::LessEqual],
                              Self::term)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Folds `operand (op operand)*` into a left-leaning tree.
    fn left_associative(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut expr = operand(self)?;

        while let Some(op) = self.match_binary_operator(operators) {
            let location = self.previous().location;
            let right = operand(self)?;
            expr = Expr::Binary { left: Box::new(expr),
                                  right: Box::new(right),
                                  op,
                                  location };
        }

        Ok(expr)
    }
}
