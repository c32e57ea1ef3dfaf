use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::Location,
        value::core::Value,
    },
};

/// Verifies that a call supplies exactly the number of arguments the
/// callee declares.
///
/// # Errors
/// `ArityMismatch` naming both counts.
///
/// # Example
/// ```
/// use treelox::interpreter::{evaluator::utils::check_arity, token::Location};
///
/// assert!(check_arity(1, 1, Location::default()).is_ok());
///
/// let error = check_arity(1, 2, Location::new(3, 7, 8)).unwrap_err();
/// assert_eq!(error.to_string(),
///            "Error on line 3, column 7: Expected 1 arguments but got 2.");
/// ```
pub const fn check_arity(expected: usize, actual: usize, location: Location) -> EvalResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(RuntimeError::ArityMismatch { expected,
                                          actual,
                                          location })
    }
}

impl Interpreter {
    /// Resolves a variable, innermost scope first and globals last.
    pub(crate) fn lookup_variable(&self, name: &str, location: Location) -> EvalResult<Value> {
        self.environment
            .borrow()
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             location })
    }

    /// Rebinds the nearest existing variable called `name`.
    ///
    /// Assigning to a name no scope declares is an error; it never creates
    /// a new global.
    pub(crate) fn assign_variable(&self,
                                  name: &str,
                                  value: Value,
                                  location: Location)
                                  -> EvalResult<()> {
        if self.environment.borrow_mut().assign(name, value) {
            return Ok(());
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              location })
    }
}
