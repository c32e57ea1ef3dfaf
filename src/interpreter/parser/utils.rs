use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        parser::core::{MAX_ARGUMENTS, ParseResult, Parser},
        token::{Location, TokenKind},
    },
};

/// Maps an operator token to its binary operator.
///
/// Returns `None` for tokens that are not binary operators. `,` is handled
/// by the comma production directly and is not mapped here.
#[must_use]
pub const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

impl Parser {
    /// Consumes the current token if it is one of `operators` and returns
    /// the matching binary operator.
    pub(in crate::interpreter::parser) fn match_binary_operator(&mut self,
                                                                operators: &[TokenKind])
                                                                -> Option<BinaryOperator> {
        let kind = self.peek().kind;
        if !operators.contains(&kind) {
            return None;
        }
        self.advance();
        binary_operator(kind)
    }

    /// Parses `item (, item)*` up to, but not including, `closing`.
    ///
    /// An empty list is allowed. Going over [`MAX_ARGUMENTS`] items records
    /// one `too_many` error for the whole list; parsing carries on
    /// regardless.
    pub(in crate::interpreter::parser) fn comma_separated<T>(
        &mut self,
        closing: TokenKind,
        too_many: impl Fn(usize, Location) -> ParseError,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(closing) {
            return Ok(items);
        }

        let mut reported = false;
        loop {
            if items.len() >= MAX_ARGUMENTS && !reported {
                let location = self.peek().location;
                self.report(too_many(MAX_ARGUMENTS, location));
                reported = true;
            }
            items.push(item(self)?);

            if !self.matches(&[TokenKind::Comma]) {
                break;
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_binary_token() {
        assert_eq!(binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
        assert_eq!(binary_operator(TokenKind::BangEqual), Some(BinaryOperator::NotEqual));
        assert_eq!(binary_operator(TokenKind::LessEqual), Some(BinaryOperator::LessEqual));
        assert_eq!(binary_operator(TokenKind::Comma), None);
        assert_eq!(binary_operator(TokenKind::Bang), None);
    }
}
