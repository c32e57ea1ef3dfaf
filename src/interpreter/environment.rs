use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared, mutable handle to an [`Environment`].
///
/// Scopes are shared between the evaluator (while a block or call is
/// running) and any function values that captured them as their closure.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A single lexical scope: name to value bindings plus a link to the
/// enclosing scope.
///
/// Lookups and assignments walk the chain outwards at runtime; there is no
/// compile-time resolution of slots.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// Creates a scope with no enclosing scope, used for the globals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: EnvRef) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(enclosing), }
    }

    /// Wraps the scope in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// The enclosing scope, if any.
    #[must_use]
    pub const fn enclosing(&self) -> Option<&EnvRef> {
        self.enclosing.as_ref()
    }

    /// Binds `name` in this scope only, replacing any existing binding of
    /// the same name here. Outer bindings are shadowed, never touched.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0));
    /// env.define("x", Value::Bool(true));
    ///
    /// assert_eq!(env.get("x"), Some(Value::Bool(true)));
    /// ```
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Rebinds the nearest existing binding of `name`, searching this scope
    /// first and then each enclosing scope.
    ///
    /// Returns `false` when no scope in the chain holds the name; nothing is
    /// changed in that case.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return true;
        }
        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => false,
        }
    }

    /// Looks `name` up through the chain, innermost scope first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        self.enclosing
            .as_ref()
            .and_then(|enclosing| enclosing.borrow().get(name))
    }

    /// Returns `true` if this scope itself (not an enclosing one) binds
    /// `name`.
    #[must_use]
    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of scopes from this one up to the outermost, inclusive.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.enclosing
                .as_ref()
                .map_or(0, |enclosing| enclosing.borrow().depth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn get_walks_outwards() {
        let globals = Environment::new().into_ref();
        globals.borrow_mut().define("a", number(1.0));

        let inner = Environment::with_enclosing(Rc::clone(&globals));
        assert_eq!(inner.get("a"), Some(number(1.0)));
        assert_eq!(inner.get("missing"), None);
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn shadowing_leaves_outer_binding_alone() {
        let globals = Environment::new().into_ref();
        globals.borrow_mut().define("a", number(1.0));

        let mut inner = Environment::with_enclosing(Rc::clone(&globals));
        inner.define("a", number(2.0));
        assert!(inner.assign("a", number(3.0)));

        assert_eq!(inner.get("a"), Some(number(3.0)));
        assert_eq!(globals.borrow().get("a"), Some(number(1.0)));
    }

    #[test]
    fn assign_updates_the_nearest_binding() {
        let globals = Environment::new().into_ref();
        globals.borrow_mut().define("a", number(1.0));
        let middle = Environment::with_enclosing(Rc::clone(&globals)).into_ref();
        let mut inner = Environment::with_enclosing(Rc::clone(&middle));

        assert!(inner.assign("a", number(5.0)));
        assert!(!inner.is_defined_locally("a"));
        assert!(!middle.borrow().is_defined_locally("a"));
        assert_eq!(globals.borrow().get("a"), Some(number(5.0)));
    }

    #[test]
    fn assign_to_unknown_name_fails() {
        let globals = Environment::new().into_ref();
        let mut inner = Environment::with_enclosing(Rc::clone(&globals));

        assert!(!inner.assign("ghost", Value::Null));
        assert_eq!(inner.get("ghost"), None);
    }

    #[test]
    fn redefinition_in_same_scope_replaces() {
        let mut env = Environment::new();
        env.define("x", number(1.0));
        env.define("x", Value::Str("s".into()));
        assert_eq!(env.get("x"), Some(Value::Str("s".into())));
        assert!(env.enclosing().is_none());
    }
}
