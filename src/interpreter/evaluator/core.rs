use std::{
    io::{self, Write},
    rc::Rc,
    time::Instant,
};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::function::core::install_builtins,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking interpreter and its runtime state.
///
/// ## Usage
///
/// An `Interpreter` is created once and reused: globals defined by one
/// [`Interpreter::interpret`] call stay visible to the next, which is what
/// the REPL relies on.
///
/// ```
/// use treelox::interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse};
///
/// let mut interpreter = Interpreter::with_output(Vec::new());
/// let (tokens, _) = tokenize("var answer = 6 * 7;");
/// let (program, _) = parse(tokens);
///
/// interpreter.interpret(&program).unwrap();
/// assert_eq!(interpreter.globals().borrow().get("answer"), Some(42.0.into()));
/// ```
pub struct Interpreter {
    /// The outermost scope. Holds the built-ins and top-level declarations.
    pub(crate) globals:     EnvRef,
    /// The innermost scope currently executing.
    pub(crate) environment: EnvRef,
    /// When the interpreter was created; `clock` measures from here.
    pub(crate) started:     Instant,
    /// Where `print` writes.
    pub(crate) output:      Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Creates an interpreter whose `print` writes to `output`.
    ///
    /// The global scope starts out holding only the built-in functions.
    #[must_use]
    pub fn with_output(output: impl Write + 'static) -> Self {
        let mut globals = Environment::new();
        install_builtins(&mut globals);
        let globals = globals.into_ref();

        Self { environment: Rc::clone(&globals),
               globals,
               started: Instant::now(),
               output: Box::new(output) }
    }

    /// The global scope.
    #[must_use]
    pub const fn globals(&self) -> &EnvRef {
        &self.globals
    }

    /// The scope statements are currently executing in.
    #[must_use]
    pub const fn environment(&self) -> &EnvRef {
        &self.environment
    }

    /// The sink `print` writes to.
    pub fn output(&mut self) -> &mut dyn Write {
        self.output.as_mut()
    }

    /// The instant the interpreter was created.
    #[must_use]
    pub const fn started(&self) -> Instant {
        self.started
    }

    /// Executes a program's top-level statements in order.
    ///
    /// The first runtime error stops execution; statements after it do not
    /// run. Anything already executed (output, definitions) is kept. The
    /// interpreter is back in the global scope afterwards either way.
    ///
    /// # Errors
    /// The runtime error that stopped execution.
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                tracing::debug!(%error, "runtime error");
                return Err(error);
            }
        }
        self.output.flush().map_err(|error| {
                                RuntimeError::Native { name:     "print",
                                                       message:  error.to_string(),
                                                       location: Default::default(), }
                            })
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant.
    ///
    /// # Errors
    /// A `RuntimeError` on a type mismatch, an undefined name or a bad call.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(value.into()),
            Expr::Group(inner) => self.evaluate(inner),
            Expr::Variable { name, location } => self.lookup_variable(name, *location),
            Expr::Assign { name,
                           value,
                           location, } => {
                let value = self.evaluate(value)?;
                self.assign_variable(name, value.clone(), *location)?;
                Ok(value)
            },
            Expr::Unary { op,
                          operand,
                          location, } => self.eval_unary(*op, operand, *location),
            Expr::Binary { left,
                           right,
                           op,
                           location, } => self.eval_binary(left, *op, right, *location),
            Expr::Logical { left, right, op } => self.eval_logical(left, *op, right),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            },
            Expr::Call { callee,
                         arguments,
                         location, } => self.eval_call(callee, arguments, *location),
        }
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating the statement's
    /// expressions, including those raised inside nested blocks and calls.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Expression(expr) => self.evaluate(expr).map(drop),
            Statement::Var { name, initializer, .. } => {
                self.execute_var(name, initializer.as_ref())
            },
            Statement::Block(statements) => {
                let scope = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, scope.into_ref())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                self.execute_if(condition, then_branch, else_branch.as_deref())
            },
            Statement::While { condition, body } => self.execute_while(condition, body),
            Statement::Function(declaration) => {
                self.execute_function_declaration(declaration);
                Ok(())
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, io::Write, rc::Rc};

    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::parse};

    /// A `Write` sink that can be read back after the interpreter owns it.
    #[derive(Clone, Default)]
    pub struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Capture {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `source`, which must scan and parse cleanly, and returns what it
    /// printed together with the runtime outcome.
    pub fn run(source: &str) -> (String, EvalResult<()>) {
        let capture = Capture::default();
        let mut interpreter = Interpreter::with_output(capture.clone());
        let (tokens, lex_errors) = tokenize(source);
        assert!(lex_errors.is_empty(), "{lex_errors:?}");
        let (program, parse_errors) = parse(tokens);
        assert!(parse_errors.is_empty(), "{parse_errors:?}");

        let result = interpreter.interpret(&program);
        (capture.contents(), result)
    }

    /// Evaluates a single expression in a fresh interpreter.
    pub fn eval(source: &str) -> EvalResult<Value> {
        let (tokens, _) = tokenize(&format!("{source};"));
        let (program, errors) = parse(tokens);
        assert!(errors.is_empty(), "{errors:?}");
        let mut interpreter = Interpreter::with_output(Vec::new());
        match &program[..] {
            [Statement::Expression(expr)] => interpreter.evaluate(expr),
            other => panic!("expected one expression statement, got {other:?}"),
        }
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        assert_eq!(eval("3.5"), Ok(Value::Number(3.5)));
        assert_eq!(eval("\"s\""), Ok(Value::from("s")));
        assert_eq!(eval("nil"), Ok(Value::Null));
        assert_eq!(eval("(true)"), Ok(Value::Bool(true)));
    }

    #[test]
    fn ternary_selects_a_branch() {
        assert_eq!(eval("true ? 1 : 2"), Ok(Value::Number(1.0)));
        assert_eq!(eval("false ? 1 : 2"), Ok(Value::Number(2.0)));
        assert_eq!(eval("nil ? 1 : 2"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn only_the_chosen_branch_runs() {
        let (output, result) = run("true ? print(\"yes\") : print(\"no\");");
        assert!(result.is_ok());
        assert_eq!(output, "yes\n");
    }

    #[test]
    fn runtime_error_stops_the_program() {
        let (output, result) = run("print(1); -\"x\"; print(2);");
        assert_eq!(output, "1\n");
        assert!(matches!(result, Err(RuntimeError::OperandMustBeNumber { .. })));
    }

    #[test]
    fn scope_is_restored_after_an_error() {
        let mut interpreter = Interpreter::with_output(Vec::new());
        let (tokens, _) = tokenize("{ var inner = 1; undefined; }");
        let (program, _) = parse(tokens);

        assert!(interpreter.interpret(&program).is_err());
        assert!(Rc::ptr_eq(interpreter.environment(), interpreter.globals()));
        assert_eq!(interpreter.globals().borrow().get("inner"), None);
    }

    #[test]
    fn globals_persist_between_runs() {
        let mut interpreter = Interpreter::with_output(Vec::new());
        for source in ["var a = 1;", "a = a + 1;"] {
            let (tokens, _) = tokenize(source);
            let (program, _) = parse(tokens);
            interpreter.interpret(&program).unwrap();
        }
        assert_eq!(interpreter.globals().borrow().get("a"), Some(Value::Number(2.0)));
    }
}
