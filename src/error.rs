/// Scanning errors.
///
/// Raised by the lexer for characters that start no token, strings that never
/// close and numeric literals that cannot be represented. Scanning always
/// continues past the offending input.
pub mod lex_error;
/// Parsing errors.
///
/// Syntax mistakes found while building the syntax tree. The parser records
/// them and resynchronises at the next statement boundary.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while evaluating: type mismatches, unknown names, calls to values
/// that are not functions and calls with the wrong number of arguments.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Everything that went wrong during one call to [`crate::run`].
///
/// Scanning and parsing are best-effort, so a single run can produce lex
/// errors, parse errors and, from executing the statements that did parse, a
/// runtime error. They are kept in pipeline order.
#[derive(Debug, Clone, PartialEq, Default, thiserror::Error)]
#[error("{}", diagnostic_lines(.lex, .parse, .runtime.as_ref()).join("\n"))]
pub struct RunError {
    /// Scanning errors.
    pub lex:     Vec<LexError>,
    /// Syntax errors.
    pub parse:   Vec<ParseError>,
    /// The runtime error that aborted execution, if any.
    pub runtime: Option<RuntimeError>,
}

impl From<RuntimeError> for RunError {
    fn from(error: RuntimeError) -> Self {
        Self { runtime: Some(error),
               ..Self::default() }
    }
}

impl RunError {
    /// Renders every diagnostic on its own line, prefixed with the name of
    /// the source it came from (a file path, or `<stdin>` for the REPL).
    ///
    /// # Example
    /// ```
    /// let err = treelox::run("print(-\"a\");").unwrap_err();
    ///
    /// assert_eq!(err.report("<stdin>"),
    ///            "<stdin>: Error on line 1, column 7: Operand must be a number.");
    /// ```
    #[must_use]
    pub fn report(&self, source_name: &str) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{source_name}: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The number of individual diagnostics carried.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lex.len() + self.parse.len() + usize::from(self.runtime.is_some())
    }

    /// `true` when nothing went wrong.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts an empty collection into `Ok(())`.
    ///
    /// # Errors
    /// `self`, when it holds at least one diagnostic.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn lines(&self) -> Vec<String> {
        diagnostic_lines(&self.lex, &self.parse, self.runtime.as_ref())
    }
}

fn diagnostic_lines(lex: &[LexError],
                    parse: &[ParseError],
                    runtime: Option<&RuntimeError>)
                    -> Vec<String> {
    lex.iter()
       .map(ToString::to_string)
       .chain(parse.iter().map(ToString::to_string))
       .chain(runtime.iter().map(ToString::to_string))
       .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::token::Location;

    #[test]
    fn diagnostics_are_listed_in_pipeline_order() {
        let error = RunError { lex:     vec![LexError::UnterminatedString { location:
                                                                                Location::new(3, 1, 2), }],
                               parse:   vec![ParseError::InvalidAssignmentTarget { location:
                                                                                      Location::new(1, 3, 4), }],
                               runtime: Some(RuntimeError::OperandMustBeNumber { location:
                                                                                     Location::new(2, 1, 2), }), };

        assert_eq!(error.len(), 3);
        let report = error.report("demo.lox");
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("demo.lox: Error on line 3, column 1"));
        assert!(lines[1].starts_with("demo.lox: Error on line 1, column 3"));
        assert!(lines[2].starts_with("demo.lox: Error on line 2, column 1"));
    }

    #[test]
    fn empty_collection_is_success() {
        assert_eq!(RunError::default().into_result(), Ok(()));
        let runtime = RunError::from(RuntimeError::OperandMustBeNumber { location: Location::default() });
        assert!(runtime.into_result().is_err());
    }
}
