use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::check_arity,
        },
        token::Location,
        value::{callable::UserFunction, core::Value},
    },
};

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to right;
    /// only then is the callee checked to be callable and the argument count
    /// checked against its arity.
    #[tracing::instrument(level = "debug", skip_all, fields(line = location.line))]
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            location: Location)
                            -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let function = match callee {
            Value::Callable(function) => function,
            other => {
                return Err(RuntimeError::NotCallable { type_name: other.type_name(),
                                                       location });
            },
        };
        check_arity(function.arity(), arguments.len(), location)?;

        tracing::debug!(function = function.name(), arguments = arguments.len(), "call");
        function.invoke(self, arguments, location)
    }

    /// Runs a user function's body.
    ///
    /// The body executes in a fresh scope nested inside the function's
    /// captured scope, seeded with one binding per parameter. A call always
    /// yields `nil`.
    pub fn call_user_function(&mut self,
                              function: &UserFunction,
                              arguments: Vec<Value>)
                              -> EvalResult<Value> {
        let declaration = &function.declaration;
        let mut scope = Environment::with_enclosing(Rc::clone(&function.closure));
        for (param, argument) in declaration.params.iter().zip(arguments) {
            scope.define(param.as_str(), argument);
        }

        self.execute_block(&declaration.body, scope.into_ref())?;
        Ok(Value::Null)
    }
}
