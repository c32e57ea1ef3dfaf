use crate::interpreter::token::Location;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot begin any token.
    #[error("Error on {location}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending text.
        character: String,
        /// Where it was found.
        location:  Location,
    },
    /// A string literal reached the end of input before its closing quote.
    #[error("Error on {location}: Unterminated string.")]
    UnterminatedString {
        /// Where the string starts.
        location: Location,
    },
    /// A numeric literal that does not fit in a double.
    #[error("Error on {location}: Number literal '{lexeme}' is out of range.")]
    MalformedNumber {
        /// The literal as written.
        lexeme:   String,
        /// Where the literal starts.
        location: Location,
    },
}

impl LexError {
    /// Where the error was detected.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnexpectedCharacter { location, .. }
            | Self::UnterminatedString { location }
            | Self::MalformedNumber { location, .. } => *location,
        }
    }
}
