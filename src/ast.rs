use std::{fmt, rc::Rc};

use crate::interpreter::token::Location;

/// A literal value written directly in source code.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `true` or `false`.
    Bool(bool),
    /// A double-quoted string.
    Str(String),
    /// A number literal.
    Number(f64),
    /// `nil`.
    Null,
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every child is owned by its parent; the tree never shares or cycles.
/// Variants that can fail at runtime carry the location used in the error
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `name = value`.
    Assign {
        /// The variable being assigned.
        name:     String,
        /// The new value.
        value:    Box<Self>,
        /// Location of the target name.
        location: Location,
    },
    /// An arithmetic, comparison, equality or comma operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Location of the operator.
        location: Location,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// Right operand, evaluated only when needed.
        right: Box<Self>,
        /// The operator.
        op:    LogicalOperator,
    },
    /// `condition ? then_branch : else_branch`.
    Ternary {
        /// The condition.
        condition:   Box<Self>,
        /// Chosen when the condition is truthy.
        then_branch: Box<Self>,
        /// Chosen otherwise.
        else_branch: Box<Self>,
    },
    /// A call `callee(arguments...)`.
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Location of the closing parenthesis.
        location:  Location,
    },
    /// A parenthesised expression.
    Group(Box<Self>),
    /// A prefix operation.
    Unary {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Location of the operator.
        location: Location,
    },
    /// A variable reference.
    Variable {
        /// The name referred to.
        name:     String,
        /// Location of the name.
        location: Location,
    },
    /// A literal leaf.
    Literal(LiteralValue),
}

impl Expr {
    /// Shorthand for a literal node.
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Shorthand for a variable reference with a default location.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name:     name.into(),
                         location: Location::default(), }
    }
}

/// A user-defined function declaration, `fun name(params) { body }`.
///
/// Held behind an `Rc` so that function values created from it can outlive
/// the statement list it was parsed into.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The function's name.
    pub name:     String,
    /// Parameter names, in order.
    pub params:   Vec<String>,
    /// The statements of the body.
    pub body:     Vec<Statement>,
    /// Location of the name.
    pub location: Location,
}

/// An abstract syntax tree (AST) node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `{ statements... }`, executed in a new scope.
    Block(Vec<Self>),
    /// An expression evaluated for its side effects.
    Expression(Expr),
    /// `if (condition) then_branch else else_branch`.
    If {
        /// The condition.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (condition) body`. `for` loops are desugared into this.
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
    /// `var name = initializer;`
    Var {
        /// The variable being declared.
        name:        String,
        /// The initial value; `nil` when absent.
        initializer: Option<Expr>,
        /// Location of the name.
        location:    Location,
    },
    /// A function declaration.
    Function(Rc<FunctionDecl>),
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Sequencing (`,`): evaluates both sides, yields the right.
    Comma,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Comma, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            Comma => ",",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Null => write!(f, "nil"),
        }
    }
}

/// Prints the expression in parenthesised prefix form, e.g.
/// `(+ 1 (* 2 3))`.
///
/// # Example
/// ```
/// use treelox::ast::{BinaryOperator, Expr};
///
/// let sum = Expr::Binary { left:     Box::new(Expr::literal(1.0)),
///                          right:    Box::new(Expr::variable("x")),
///                          op:       BinaryOperator::Add,
///                          location: Default::default(), };
///
/// assert_eq!(sum.to_string(), "(+ 1 x)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
            Self::Binary { left, right, op, .. } => write!(f, "({op} {left} {right})"),
            Self::Logical { left, right, op } => write!(f, "({op} {left} {right})"),
            Self::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                write!(f, "(?: {condition} {then_branch} {else_branch})")
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "(call {callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
            Self::Group(inner) => write!(f, "(group {inner})"),
            Self::Unary { op, operand, .. } => write!(f, "({op} {operand})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

/// Prints the statement in the same prefix form as [`Expr`]; blocks and
/// function bodies list their statements separated by spaces.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block(statements) => {
                write!(f, "(block")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
            Self::Expression(expr) => write!(f, "(; {expr})"),
            Self::If { condition,
                       then_branch,
                       else_branch, } => match else_branch {
                Some(else_branch) => write!(f, "(if {condition} {then_branch} {else_branch})"),
                None => write!(f, "(if {condition} {then_branch})"),
            },
            Self::While { condition, body } => write!(f, "(while {condition} {body})"),
            Self::Var { name,
                        initializer, .. } => match initializer {
                Some(value) => write!(f, "(var {name} {value})"),
                None => write!(f, "(var {name})"),
            },
            Self::Function(decl) => {
                write!(f, "(fun {} ({})", decl.name, decl.params.join(" "))?;
                for statement in &decl.body {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
        }
    }
}
