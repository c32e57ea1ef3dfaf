use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDecl,
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, Interpreter},
        token::Location,
        value::core::Value,
    },
};

/// Signature of a built-in function.
///
/// A built-in receives the interpreter (for output and the start-up clock),
/// its already-evaluated arguments and the call site for error reporting.
/// The argument count has been checked against the declared arity before the
/// built-in runs.
pub type NativeFn = fn(&mut Interpreter, &[Value], Location) -> EvalResult<Value>;

/// A function implemented in Rust.
#[derive(Clone)]
pub struct NativeFunction {
    /// Name the function is bound to in the global scope.
    pub name:  &'static str,
    /// Exact number of arguments accepted.
    pub arity: usize,
    /// The implementation.
    pub func:  NativeFn,
}

/// A function declared in a script.
///
/// Holds the declaration it was created from and the scope that was active
/// when the declaration executed. Calls run in a fresh scope nested inside
/// that captured one.
#[derive(Clone)]
pub struct UserFunction {
    /// The `fun` declaration.
    pub declaration: Rc<FunctionDecl>,
    /// The defining scope.
    pub closure:     EnvRef,
}

/// Anything that can be called.
#[derive(Clone)]
pub enum Callable {
    Native(NativeFunction),
    User(UserFunction),
}

impl Callable {
    /// Number of arguments a call must supply.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Native(native) => native.arity,
            Self::User(user) => user.declaration.params.len(),
        }
    }

    /// The function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Native(native) => native.name,
            Self::User(user) => &user.declaration.name,
        }
    }

    /// Display form, `<fn name>` or `<native fn name>`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Runs the function with already-evaluated arguments.
    ///
    /// The caller is responsible for checking the argument count against
    /// [`Callable::arity`].
    pub fn invoke(&self,
                  interpreter: &mut Interpreter,
                  arguments: Vec<Value>,
                  location: Location)
                  -> EvalResult<Value> {
        match self {
            Self::Native(native) => (native.func)(interpreter, &arguments, location),
            Self::User(user) => interpreter.call_user_function(user, arguments),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => write!(f, "<native fn {}>", native.name),
            Self::User(user) => write!(f, "<fn {}>", user.declaration.name),
        }
    }
}

// The closure can contain the function itself, so the derived form would
// recurse forever.
impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => {
                f.debug_struct("Native")
                 .field("name", &native.name)
                 .field("arity", &native.arity)
                 .finish_non_exhaustive()
            },
            Self::User(user) => {
                f.debug_struct("User")
                 .field("name", &user.declaration.name)
                 .field("params", &user.declaration.params)
                 .finish_non_exhaustive()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::environment::Environment;

    fn no_op(_: &mut Interpreter, _: &[Value], _: Location) -> EvalResult<Value> {
        Ok(Value::Null)
    }

    #[test]
    fn native_metadata() {
        let native = Callable::Native(NativeFunction { name:  "clock",
                                                       arity: 0,
                                                       func:  no_op, });
        assert_eq!(native.arity(), 0);
        assert_eq!(native.name(), "clock");
        assert_eq!(native.describe(), "<native fn clock>");
    }

    #[test]
    fn user_metadata() {
        let declaration = FunctionDecl { name:     "add".into(),
                                         params:   vec!["a".into(), "b".into()],
                                         body:     Vec::new(),
                                         location: Location::default(), };
        let user = Callable::User(UserFunction { declaration: Rc::new(declaration),
                                                 closure:     Environment::new().into_ref(), });
        assert_eq!(user.arity(), 2);
        assert_eq!(user.to_string(), "<fn add>");
        assert!(format!("{user:?}").contains("add"));
    }

    #[test]
    fn callables_compare_by_identity() {
        let native = Value::from(Callable::Native(NativeFunction { name:  "f",
                                                                   arity: 0,
                                                                   func:  no_op, }));
        let same = native.clone();
        let other = Value::from(Callable::Native(NativeFunction { name:  "f",
                                                                  arity: 0,
                                                                  func:  no_op, }));
        assert_eq!(native, same);
        assert_ne!(native, other);
    }
}
