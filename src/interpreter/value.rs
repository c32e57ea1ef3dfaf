/// The runtime value type.
///
/// Defines `Value`, the closed sum of booleans, numbers, strings, `nil` and
/// callables, together with truthiness, equality and display rules.
pub mod core;

/// Callable values.
///
/// Defines native built-ins and user-defined functions, which are the two
/// kinds of value that can appear in call position.
pub mod callable;
