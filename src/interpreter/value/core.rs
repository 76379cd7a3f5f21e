use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::BlockStatement,
    error::RuntimeError,
    interpreter::value::environment::Env,
};

/// Signature shared by all builtin functions: evaluated arguments in, one
/// value out. Builtins report failures by returning a [`Value::Error`] of
/// their own shape.
pub type BuiltinFn = fn(Vec<Value>) -> Value;

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: the user-facing
/// scalars and aggregates, plus two carrier variants that only exist while
/// evaluation is in flight ([`ReturnValue`](Value::ReturnValue) and
/// [`Error`](Value::Error)).
///
/// Values are structurally immutable once constructed; aggregates share
/// their payload through `Rc`, so cloning a value never copies element
/// storage.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and the `!`
    /// prefix. The two booleans behave as canonical singletons: equality on
    /// them is equality of the tag.
    Boolean(bool),
    /// A string of bytes. No escape processing is ever applied.
    Str(String),
    /// The absent value: the result of an `if` without a taken branch and
    /// the payload of several "nothing there" builtin results.
    Null,
    /// Wrapper around the operand of a `return` statement. It unwinds
    /// through enclosing blocks untouched and is unwrapped exactly once, at
    /// the nearest function-call boundary.
    ReturnValue(Box<Self>),
    /// A runtime failure. Error values short-circuit every enclosing
    /// expression and statement and surface as the program's result.
    Error(RuntimeError),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(Builtin),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash mapping hashable keys to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
}

/// A first-class function value.
///
/// The environment reference is the closure capture: free identifiers in
/// the body resolve against the scope chain in force where the function
/// literal was evaluated, for as long as the function lives.
#[derive(Clone)]
pub struct Function {
    /// Parameter names, bound positionally at call time.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment captured at the definition site.
    pub env:        Env,
}

// The captured environment is deliberately left out: a binding can hold the
// function that captured it, and walking that cycle would never terminate.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// A native function and the name it is published under.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin table publishes this function under.
    pub name: &'static str,
    /// The native implementation.
    pub func: BuiltinFn,
}

/// A key a hash value can be indexed by.
///
/// Only integers, booleans, and strings hash; every other value in key
/// position is diagnosed at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// An integer key.
    Integer(i64),
    /// A boolean key.
    Boolean(bool),
    /// A string key.
    Str(String),
}

/// One key/value entry of a hash.
///
/// The original key value is kept alongside the derived [`HashKey`] so the
/// hash can render itself exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as evaluated.
    pub key:   Value,
    /// The associated value.
    pub value: Value,
}

impl Value {
    /// Returns the type tag used by error messages and diagnostics.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(5).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Returns `true` if the value is an [`Error`](Value::Error).
    ///
    /// Evaluation checks this after every recursive step; an error subresult
    /// must propagate before it can become an operand.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Derives the hash key for this value, or `None` for types that cannot
    /// serve as hash keys.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::value::core::{HashKey, Value};
    ///
    /// assert_eq!(Value::Integer(1).hash_key(), Some(HashKey::Integer(1)));
    /// assert_eq!(Value::Null.hash_key(), None);
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::Integer(*value)),
            Self::Boolean(value) => Some(HashKey::Boolean(*value)),
            Self::Str(value) => Some(HashKey::Str(value.clone())),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Equality as the language observes it.
    ///
    /// Scalars and `null` compare by content, which is what identity on
    /// canonical singletons would observe. Functions, arrays, and hashes
    /// compare by reference: two separately constructed aggregates are
    /// never equal, even with identical contents.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::ReturnValue(left), Self::ReturnValue(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left.name == right.name,
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Writes the canonical source-like rendering ("inspect" form) used by
    /// the REPL and by tests.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(42).to_string(), "42");
    /// assert_eq!(Value::Str("Hello".to_string()).to_string(), "Hello");
    /// assert_eq!(Value::Null.to_string(), "null");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Hash(pairs) => {
                let pairs = pairs.values()
                                 .map(|pair| format!("{}: {}", pair.key, pair.value))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}
