use crate::interpreter::token::Location;

/// Represents all errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The next token does not fit the grammar at this point.
    #[error("Error on {location} at {found}: {message}")]
    UnexpectedToken {
        /// What the parser wanted.
        message:  String,
        /// How the offending token is described (`'x'` or `end`).
        found:    String,
        /// Where the offending token starts.
        location: Location,
    },
    /// The left side of `=` is not a plain variable.
    #[error("Error on {location}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// Where the `=` is.
        location: Location,
    },
    /// A call lists more arguments than allowed.
    #[error("Error on {location}: Can't have more than {max} arguments.")]
    TooManyArguments {
        /// The limit.
        max:      usize,
        /// Where the first argument past the limit starts.
        location: Location,
    },
    /// A function declaration lists more parameters than allowed.
    #[error("Error on {location}: Can't have more than {max} parameters.")]
    TooManyParameters {
        /// The limit.
        max:      usize,
        /// Where the first parameter past the limit starts.
        location: Location,
    },
}

impl ParseError {
    /// Where the error was detected.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedToken { location, .. }
            | Self::InvalidAssignmentTarget { location }
            | Self::TooManyArguments { location, .. }
            | Self::TooManyParameters { location, .. } => *location,
        }
    }
}
