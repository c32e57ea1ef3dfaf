use std::{fmt, rc::Rc};

use crate::{ast::LiteralValue, interpreter::value::callable::Callable};

/// Represents a runtime value in the interpreter.
///
/// Every variant except `Callable` is copied on assignment; callables are
/// shared, since a function value can outlive the statement that declared
/// it and may be held by several scopes at once.
#[derive(Debug, Clone)]
pub enum Value {
    /// `true` or `false`. Produced by comparisons, equality and `!`.
    Bool(bool),
    /// A double-precision number. All arithmetic is IEEE-754.
    Number(f64),
    /// An immutable string.
    Str(String),
    /// The absence of a value, spelled `nil`.
    Null,
    /// A function, built-in or user-defined.
    Callable(Rc<Callable>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Self::Callable(Rc::new(c))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// The name of the value's type as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Null => "nil",
            Self::Callable(_) => "function",
        }
    }

    /// Interprets the value as a condition.
    ///
    /// Only `false` itself is falsy. `0`, the empty string and `nil` are all
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// Returns the number if this is a `Value::Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the callable if this is a `Value::Callable`.
    #[must_use]
    pub fn as_callable(&self) -> Option<&Rc<Callable>> {
        match self {
            Self::Callable(c) => Some(c),
            _ => None,
        }
    }
}

/// Structural equality between values of the same type.
///
/// Values of different types are never equal, and comparing them is not an
/// error. Numbers follow IEEE-754, so `NaN` differs from itself. Callables
/// are equal only when they are the same function object.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Callable(a), Self::Callable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "nil"),
            Self::Callable(c) => write!(f, "{c}"),
        }
    }
}
