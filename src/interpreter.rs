/// Token types produced by the lexer.
///
/// Defines `TokenKind`, the decoded `Literal` a token may carry, source
/// `Location`s and the `Token` itself.
pub mod token;
/// The reserved word table.
///
/// A static mapping from keyword spellings to token kinds, consulted by the
/// lexer whenever it scans an identifier.
pub mod keyword;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a flat sequence of tokens
/// terminated by `Eof`. Bad input is recorded as a `LexError` and skipped, so
/// one stray character never hides the rest of the file.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   decoded literal and source location.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with statement-level error recovery.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Lowers `for` loops into `while` loops.
/// - Validates grammar, reporting errors with location info and resuming at
///   the next statement boundary.
pub mod parser;
/// Lexical scopes.
///
/// An environment maps names to values and links to its enclosing
/// environment; lookups and assignments walk the chain outwards.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Callable` kinds.
/// - Implements truthiness, equality and display rules.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks statements and expressions, manages the active scope
/// and dispatches calls to user-defined and built-in functions.
///
/// # Responsibilities
/// - Evaluates every expression form and executes every statement form.
/// - Enforces operand types and call arity.
/// - Reports runtime errors such as type mismatches and undefined names.
pub mod evaluator;
