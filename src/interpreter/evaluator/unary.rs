use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::Location,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a prefix operation.
    ///
    /// `-` requires a number. `!` accepts anything and negates its
    /// truthiness, so `!0` is `false` and `!nil` is `false`.
    pub(crate) fn eval_unary(&mut self,
                             op: UnaryOperator,
                             operand: &Expr,
                             location: Location)
                             -> EvalResult<Value> {
        let value = self.evaluate(operand)?;

        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => {
                value.as_number()
                     .map(|n| Value::Number(-n))
                     .ok_or(RuntimeError::OperandMustBeNumber { location })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{evaluator::core::tests::eval, token::Location, value::core::Value},
    };

    #[test]
    fn not_follows_truthiness() {
        assert_eq!(eval("!0"), Ok(Value::Bool(false)));
        assert_eq!(eval("!false"), Ok(Value::Bool(true)));
        assert_eq!(eval("!nil"), Ok(Value::Bool(false)));
        assert_eq!(eval("!\"\""), Ok(Value::Bool(false)));
        assert_eq!(eval("!!true"), Ok(Value::Bool(true)));
    }

    #[test]
    fn negation() {
        assert_eq!(eval("-3"), Ok(Value::Number(-3.0)));
        assert_eq!(eval("--3"), Ok(Value::Number(3.0)));
    }

    #[test]
    fn negating_a_non_number_fails_at_the_operator() {
        assert_eq!(eval("-\"a\""),
                   Err(RuntimeError::OperandMustBeNumber { location: Location::new(1, 1, 2) }));
        assert!(eval("-true").is_err());
    }
}
