/// Parser state, token navigation and the program-level entry point.
///
/// Holds the token cursor, the comma-suppression flag used inside argument
/// lists and the list of recorded syntax errors. Also implements statement
/// level recovery (synchronisation).
pub mod core;

/// Declaration and statement parsing.
///
/// Handles `var` and `fun` declarations plus `if`, `while`, `for` (desugared
/// into `while`), blocks and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses the declarations between `{` and `}`.
pub mod block;

/// Binary-precedence expression parsing.
///
/// Implements assignment, the comma operator, `or`, `and`, the ternary
/// operator, equality, comparison, term and factor levels.
pub mod binary;

/// Unary, call and primary expression parsing.
pub mod unary;

/// Helpers shared by the parsing modules.
///
/// Comma-separated lists with an upper bound on their length.
pub mod utils;

pub use self::core::{ParseResult, Parser, parse};
