use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::Location,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates both operands left to right, then applies `op`.
    pub(crate) fn eval_binary(&mut self,
                              left: &Expr,
                              op: BinaryOperator,
                              right: &Expr,
                              location: Location)
                              -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        binary_op(op, left, right, location)
    }

    /// Short-circuiting `and` / `or`.
    ///
    /// The left operand is returned as is when its truthiness already
    /// decides the result; otherwise the right operand is evaluated and
    /// returned. Neither result is coerced to a boolean.
    pub(crate) fn eval_logical(&mut self,
                               left: &Expr,
                               op: LogicalOperator,
                               right: &Expr)
                               -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };
        if decided {
            return Ok(left);
        }
        self.evaluate(right)
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// - `+` adds two numbers or concatenates two strings.
/// - `- * /` and the comparisons need two numbers. There is no implicit
///   coercion.
/// - `==` and `!=` accept any pair; values of different types are unequal.
/// - `,` discards the left operand and yields the right.
///
/// # Errors
/// `InvalidAddition` or `OperandsMustBeNumbers` when the operand types do
/// not fit the operator.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::binary_op, token::Location, value::core::Value},
/// };
///
/// let loc = Location::default();
/// let joined = binary_op(BinaryOperator::Add, "a".into(), "b".into(), loc).unwrap();
/// assert_eq!(joined, Value::from("ab"));
///
/// assert!(binary_op(BinaryOperator::Add, 1.0.into(), "a".into(), loc).is_err());
/// ```
pub fn binary_op(op: BinaryOperator,
                 left: Value,
                 right: Value,
                 location: Location)
                 -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Comma, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => add(left, right, location),
        Sub => arithmetic(op, &left, &right, location, |a, b| a - b),
        Mul => arithmetic(op, &left, &right, location, |a, b| a * b),
        Div => arithmetic(op, &left, &right, location, |a, b| a / b),
        Less => comparison(op, &left, &right, location, |a, b| a < b),
        Greater => comparison(op, &left, &right, location, |a, b| a > b),
        LessEqual => comparison(op, &left, &right, location, |a, b| a <= b),
        GreaterEqual => comparison(op, &left, &right, location, |a, b| a >= b),
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),
        Comma => Ok(right),
    }
}

fn add(left: Value, right: Value, location: Location) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        },
        (left, right) => Err(RuntimeError::InvalidAddition { left: left.type_name(),
                                                             right: right.type_name(),
                                                             location }),
    }
}

fn arithmetic(op: BinaryOperator,
              left: &Value,
              right: &Value,
              location: Location,
              apply: fn(f64, f64) -> f64)
              -> EvalResult<Value> {
    let (a, b) = number_operands(op, left, right, location)?;
    Ok(Value::Number(apply(a, b)))
}

fn comparison(op: BinaryOperator,
              left: &Value,
              right: &Value,
              location: Location,
              apply: fn(f64, f64) -> bool)
              -> EvalResult<Value> {
    let (a, b) = number_operands(op, left, right, location)?;
    Ok(Value::Bool(apply(a, b)))
}

fn number_operands(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   location: Location)
                   -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                       left: left.type_name(),
                                                       right: right.type_name(),
                                                       location }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{
            evaluator::core::tests::{eval, run},
            value::core::Value,
        },
    };

    #[test]
    fn arithmetic_respects_precedence() {
        assert_eq!(eval("6 / 2"), Ok(Value::Number(3.0)));
        assert_eq!(eval("2 + 3 * 4"), Ok(Value::Number(14.0)));
        assert_eq!(eval("(2 + 3) * 4"), Ok(Value::Number(20.0)));
        assert_eq!(eval("10 - 4 - 3"), Ok(Value::Number(3.0)));
        assert_eq!(eval("0.1 + 0.2"), Ok(Value::Number(0.1 + 0.2)));
    }

    #[test]
    fn division_by_zero_is_ieee() {
        assert_eq!(eval("1 / 0"), Ok(Value::Number(f64::INFINITY)));
        assert_eq!(eval("-1 / 0"), Ok(Value::Number(f64::NEG_INFINITY)));
        assert!(matches!(eval("0 / 0"), Ok(Value::Number(n)) if n.is_nan()));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(eval("\"a\" + \"b\""), Ok(Value::from("ab")));
        assert_eq!(eval("\"\" + \"\""), Ok(Value::from("")));
    }

    #[test]
    fn mixed_addition_is_an_error() {
        let error = eval("1 + \"a\"").unwrap_err();
        assert!(matches!(error,
                         RuntimeError::InvalidAddition { left: "number",
                                                         right: "string",
                                                         .. }));
        assert!(eval("nil + nil").is_err());
    }

    #[test]
    fn numeric_operators_reject_other_types() {
        let error = eval("\"3\" * 2").unwrap_err();
        assert_eq!(error.to_string(),
                   "Error on line 1, column 5: Operands of '*' must be numbers, got string and \
                    number.");
        assert!(eval("true < false").is_err());
        assert!(eval("nil - 1").is_err());
    }

    #[test]
    fn comparisons() {
        assert_eq!(eval("1 < 2"), Ok(Value::Bool(true)));
        assert_eq!(eval("2 <= 2"), Ok(Value::Bool(true)));
        assert_eq!(eval("1 > 2"), Ok(Value::Bool(false)));
        assert_eq!(eval("3 >= 4"), Ok(Value::Bool(false)));
    }

    #[test]
    fn equality_never_fails() {
        assert_eq!(eval("1 == 1"), Ok(Value::Bool(true)));
        assert_eq!(eval("1 == \"1\""), Ok(Value::Bool(false)));
        assert_eq!(eval("nil == false"), Ok(Value::Bool(false)));
        assert_eq!(eval("nil == nil"), Ok(Value::Bool(true)));
        assert_eq!(eval("\"a\" != \"b\""), Ok(Value::Bool(true)));
        assert_eq!(eval("clock == clock"), Ok(Value::Bool(true)));
        assert_eq!(eval("clock == now"), Ok(Value::Bool(false)));
    }

    #[test]
    fn comma_yields_the_right_operand() {
        assert_eq!(eval("1, 2, 3"), Ok(Value::Number(3.0)));
        let (output, _) = run("var x = (print(1), 2); print(x);");
        assert_eq!(output, "1\n2\n");
    }

    #[test]
    fn logical_operators_short_circuit() {
        assert_eq!(eval("false and undefined_fn()"), Ok(Value::Bool(false)));
        assert_eq!(eval("true or undefined_fn()"), Ok(Value::Bool(true)));
        assert!(eval("true and undefined_fn()").is_err());
    }

    #[test]
    fn logical_operators_return_operands() {
        assert_eq!(eval("nil or \"default\""), Ok(Value::from("default")));
        assert_eq!(eval("0 and \"second\""), Ok(Value::from("second")));
        assert_eq!(eval("false or nil"), Ok(Value::Null));
    }
}
