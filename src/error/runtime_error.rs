use crate::interpreter::token::Location;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A name that no scope in the chain defines.
    #[error("Error on {location}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name that was looked up or assigned.
        name:     String,
        /// Where the reference is.
        location: Location,
    },
    /// A unary operator applied to a non-number.
    #[error("Error on {location}: Operand must be a number.")]
    OperandMustBeNumber {
        /// Where the operator is.
        location: Location,
    },
    /// A numeric binary operator applied to something other than two numbers.
    #[error("Error on {location}: Operands of '{operator}' must be numbers, got {left} and {right}.")]
    OperandsMustBeNumbers {
        /// The operator's spelling.
        operator: String,
        /// Type of the left operand.
        left:     &'static str,
        /// Type of the right operand.
        right:    &'static str,
        /// Where the operator is.
        location: Location,
    },
    /// `+` applied to anything but two numbers or two strings.
    #[error("Error on {location}: Operands of '+' must be two numbers or two strings, got {left} and {right}.")]
    InvalidAddition {
        /// Type of the left operand.
        left:     &'static str,
        /// Type of the right operand.
        right:    &'static str,
        /// Where the operator is.
        location: Location,
    },
    /// A call whose callee is not a function.
    #[error("Error on {location}: Can only call functions, got {type_name}.")]
    NotCallable {
        /// Type of the value that was called.
        type_name: &'static str,
        /// Where the call's closing parenthesis is.
        location:  Location,
    },
    /// A call with the wrong number of arguments.
    #[error("Error on {location}: Expected {expected} arguments but got {actual}.")]
    ArityMismatch {
        /// The callee's declared arity.
        expected: usize,
        /// The number of arguments supplied.
        actual:   usize,
        /// Where the call's closing parenthesis is.
        location: Location,
    },
    /// A built-in function failed for a reason outside the language.
    #[error("Error on {location}: Built-in '{name}' failed: {message}.")]
    Native {
        /// Name of the built-in.
        name:     &'static str,
        /// What went wrong.
        message:  String,
        /// Where the call is.
        location: Location,
    },
}

impl RuntimeError {
    /// Where the error was raised.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UndefinedVariable { location, .. }
            | Self::OperandMustBeNumber { location }
            | Self::OperandsMustBeNumbers { location, .. }
            | Self::InvalidAddition { location, .. }
            | Self::NotCallable { location, .. }
            | Self::ArityMismatch { location, .. }
            | Self::Native { location, .. } => *location,
        }
    }
}
