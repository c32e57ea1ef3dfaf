use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, Statement},
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, Interpreter},
        value::{
            callable::{Callable, UserFunction},
            core::Value,
        },
    },
};

impl Interpreter {
    /// Executes `statements` with `environment` as the active scope.
    ///
    /// The previous scope is restored before returning, whether or not a
    /// statement failed; the error, if any, is then passed on to the caller.
    ///
    /// # Errors
    /// The first runtime error raised by one of the statements.
    pub fn execute_block(&mut self, statements: &[Statement], environment: EnvRef) -> EvalResult<()> {
        let previous = std::mem::replace(&mut self.environment, environment);
        tracing::debug!(depth = self.environment.borrow().depth(), "enter scope");

        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        tracing::debug!(depth = self.environment.borrow().depth(), "leave scope");
        result
    }

    /// Binds `name` in the current scope to the initializer's value, or to
    /// `nil` when there is none.
    pub(crate) fn execute_var(&mut self, name: &str, initializer: Option<&Expr>) -> EvalResult<()> {
        let value = match initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Null,
        };
        self.environment.borrow_mut().define(name, value);
        Ok(())
    }

    pub(crate) fn execute_if(&mut self,
                             condition: &Expr,
                             then_branch: &Statement,
                             else_branch: Option<&Statement>)
                             -> EvalResult<()> {
        if self.evaluate(condition)?.is_truthy() {
            self.execute(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    pub(crate) fn execute_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<()> {
        while self.evaluate(condition)?.is_truthy() {
            self.execute(body)?;
        }
        Ok(())
    }

    /// Creates a function value closing over the current scope and binds it
    /// under the declared name in that same scope, so the function can call
    /// itself recursively.
    pub(crate) fn execute_function_declaration(&mut self, declaration: &Rc<FunctionDecl>) {
        let function = Callable::User(UserFunction { declaration: Rc::clone(declaration),
                                                     closure:     Rc::clone(&self.environment), });
        self.environment
            .borrow_mut()
            .define(declaration.name.clone(), function.into());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{error::RuntimeError, interpreter::evaluator::core::tests::run};

    #[test]
    fn block_scoped_variable_is_gone_after_the_block() {
        let (output, result) = run("{ var a = 1; print(a); } print(a);");
        assert_eq!(output, "1\n");
        assert!(matches!(result, Err(RuntimeError::UndefinedVariable { ref name, .. }) if name == "a"));
    }

    #[test]
    fn shadowing_does_not_touch_outer_binding() {
        let (output, result) = run("var a = \"outer\"; { var a = \"inner\"; print(a); } print(a);");
        assert!(result.is_ok());
        assert_eq!(output, "inner\nouter\n");
    }

    #[test]
    fn assignment_in_block_updates_outer_binding() {
        let (output, _) = run("var a = 1; { a = 2; } print(a);");
        assert_eq!(output, "2\n");
    }

    #[test]
    fn var_without_initializer_is_nil() {
        let (output, _) = run("var a; print(a);");
        assert_eq!(output, "nil\n");
    }

    #[test]
    fn redeclaration_replaces() {
        let (output, _) = run("var a = 1; var a = 2; print(a);");
        assert_eq!(output, "2\n");
    }

    #[test]
    fn if_else() {
        let (output, _) = run("if (0) print(\"zero is truthy\"); else print(\"no\");
                               if (false) print(1); else print(2);
                               if (false) print(3);");
        assert_eq!(output, "zero is truthy\n2\n");
    }

    #[test]
    fn while_loop_counts() {
        let (output, _) = run("var i = 0; while (i < 3) { print(i); i = i + 1; }");
        assert_eq!(output, "0\n1\n2\n");
    }

    #[test]
    fn for_loop_runs_exactly_three_times() {
        let (output, result) = run("for (var i = 0; i < 3; i = i + 1) print(i);");
        assert!(result.is_ok());
        assert_eq!(output, "0\n1\n2\n");
    }

    #[test]
    fn for_loop_variable_is_scoped_to_the_loop() {
        let (_, result) = run("for (var i = 0; i < 1; i = i + 1) {} print(i);");
        assert!(matches!(result, Err(RuntimeError::UndefinedVariable { .. })));
    }

    #[test]
    fn errors_inside_nested_blocks_propagate() {
        let (output, result) = run("{ { print(1); 1 + nil; print(2); } print(3); } print(4);");
        assert_eq!(output, "1\n");
        assert!(matches!(result, Err(RuntimeError::InvalidAddition { .. })));
    }

    #[test]
    fn errors_inside_loops_propagate() {
        let (output, result) = run("var i = 0; while (true) { print(i); i = i + 1; if (i == 2) -nil; }");
        assert_eq!(output, "0\n1\n");
        assert!(result.is_err());
    }
}
