//! # treelox
//!
//! treelox is a tree-walking interpreter for a small dynamically-typed
//! scripting language with C-like syntax: variables, arithmetic, comparisons,
//! short-circuiting logic, `if`/`while`/`for`, first-class functions with
//! lexical closures, a ternary operator and a comma operator.
//!
//! Source text flows through a lexer, a recursive-descent parser and a
//! tree-walking evaluator. Lexing and parsing recover from errors so that a
//! single mistake does not hide the rest of the program; a runtime error
//! stops the run.
//!
//! ```
//! let mut session = treelox::Session::with_output(Vec::new());
//!
//! session.run("fun square(x) { print(x * x); }").unwrap();
//! session.run("square(4);").unwrap();
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to the nodes that can fail at runtime.
/// - Prints nodes in a parenthesised prefix form for debugging.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Attaches line and column information to every error.
/// - Aggregates the errors of one run into a `RunError`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime value
/// model.
pub mod interpreter;

pub use error::RunError;

/// Runs a complete program in a fresh interpreter that prints to standard
/// output.
///
/// Lexing and parsing are best-effort: statements that parsed are executed
/// even when other parts of the source are malformed. Execution stops at the
/// first runtime error.
///
/// # Errors
/// A `RunError` listing every lex and parse error plus the runtime error that
/// stopped execution, if any.
///
/// # Examples
/// ```
/// assert!(treelox::run("var a = 1; var b = a + 2;").is_ok());
///
/// // A runtime error: the variable was never declared.
/// let err = treelox::run("var y = x + 1;").unwrap_err();
/// assert!(err.runtime.is_some());
///
/// // A syntax error in the first statement does not stop the second.
/// let err = treelox::run("var = 1; var ok = true;").unwrap_err();
/// assert_eq!(err.parse.len(), 1);
/// assert!(err.runtime.is_none());
/// ```
pub fn run(source: &str) -> Result<(), RunError> {
    Session::new().run(source)
}

/// An interpreter that outlives individual runs.
///
/// Every [`Session::run`] call executes in the same global scope, so
/// variables and functions defined by one call are visible to the next. This
/// is how the REPL evaluates a program line by line.
pub struct Session {
    interpreter: Interpreter,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session whose `print` writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self { interpreter: Interpreter::new() }
    }

    /// Creates a session whose `print` writes to `output`.
    #[must_use]
    pub fn with_output(output: impl Write + 'static) -> Self {
        Self { interpreter: Interpreter::with_output(output) }
    }

    /// The underlying interpreter.
    pub const fn interpreter(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Scans, parses and executes `source` in this session.
    ///
    /// # Errors
    /// A `RunError` listing every diagnostic the run produced.
    pub fn run(&mut self, source: &str) -> Result<(), RunError> {
        let (tokens, lex_errors) = tokenize(source);
        let (program, parse_errors) = parse(tokens);
        tracing::debug!(statements = program.len(),
                        lex_errors = lex_errors.len(),
                        parse_errors = parse_errors.len(),
                        "parsed");

        let runtime = self.interpreter.interpret(&program).err();
        RunError { lex: lex_errors,
                   parse: parse_errors,
                   runtime }.into_result()
    }
}
