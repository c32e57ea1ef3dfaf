
use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::check_arity,
        },
        token::Location,
        value::core::Value,
    },
};

/// Returns the seconds elapsed since the interpreter was created.
///
/// Takes no arguments.
///
/// # Example
/// ```
/// use treelox::interpreter::{
///     evaluator::{core::Interpreter, function::builtin::clock},
///     token::Location,
///     value::core::Value,
/// };
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
/// let elapsed = clock(&mut interpreter, &[], Location::default()).unwrap();
///
/// assert!(matches!(elapsed, Value::Number(s) if s >= 0.0));
/// ```
pub fn clock(interpreter: &mut Interpreter, args: &[Value], location: Location) -> EvalResult<Value> {
    check_arity(0, args.len(), location)?;
    Ok(Value::Number(interpreter.started().elapsed().as_secs_f64()))
}

/// Writes a value and a newline to the interpreter's output.
///
/// Accepts exactly one argument of any type and returns `nil`. Strings are
/// written without quotes.
///
/// # Errors
/// `ArityMismatch` for anything but one argument, `Native` if the output
/// cannot be written.
pub fn print(interpreter: &mut Interpreter, args: &[Value], location: Location) -> EvalResult<Value> {
    let [value] = args else {
        return Err(RuntimeError::ArityMismatch { expected: 1,
                                                 actual: args.len(),
                                                 location });
    };

    writeln!(interpreter.output(), "{value}").map_err(|error| {
                                                 RuntimeError::Native { name: "print",
                                                                        message: error.to_string(),
                                                                        location }
                                             })?;
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::core::tests::{Capture, run};

    #[test]
    fn print_writes_one_line_per_call() {
        let capture = Capture::default();
        let mut interpreter = Interpreter::with_output(capture.clone());

        let result = print(&mut interpreter, &[Value::from("hi")], Location::default());
        assert_eq!(result, Ok(Value::Null));
        print(&mut interpreter, &[Value::Number(2.5)], Location::default()).unwrap();

        assert_eq!(capture.contents(), "hi\n2.5\n");
    }

    #[test]
    fn print_checks_its_arity() {
        let mut interpreter = Interpreter::with_output(Vec::new());
        let result = print(&mut interpreter, &[], Location::default());
        assert!(matches!(result, Err(RuntimeError::ArityMismatch { expected: 1, actual: 0, .. })));
    }

    #[test]
    fn clock_is_monotonic() {
        let (output, result) = run("var a = clock(); var b = now(); print(b >= a); print(a >= 0);");
        assert!(result.is_ok());
        assert_eq!(output, "true\ntrue\n");
    }

    #[test]
    fn clock_takes_no_arguments() {
        let (_, result) = run("clock(1);");
        assert!(matches!(result, Err(RuntimeError::ArityMismatch { expected: 0, actual: 1, .. })));
    }
}
