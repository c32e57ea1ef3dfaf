/// Built-in function implementations.
///
/// `clock` and `print`.
pub mod builtin;

/// The built-in table and its installation into the global scope.
pub mod core;
