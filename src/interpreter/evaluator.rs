/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter` struct, expression and statement dispatch and
/// the top-level `interpret` driver.
pub mod core;

/// Statement execution.
///
/// Blocks, variable and function declarations, `if` and `while`.
pub mod statement;

/// Binary and logical operator evaluation.
///
/// Arithmetic, comparison, equality, string concatenation, the comma
/// operator and short-circuiting `and` / `or`.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Call evaluation.
///
/// Evaluates callee and arguments, checks arity and dispatches to built-in
/// or user-defined functions.
pub mod call;

/// Utility functions for evaluation.
///
/// Variable resolution and shared checks.
pub mod utils;

/// Built-in functions.
///
/// The table of natives installed into the global scope and their
/// implementations.
pub mod function;
