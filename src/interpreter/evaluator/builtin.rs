use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::value::core::{Builtin, BuiltinFn, Value},
};

/// Defines the builtin functions by generating a lookup table and a name
/// list.
///
/// Each entry pairs a published name with the native function implementing
/// it. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ( $( $name:literal => $func:expr ),* $(,)? ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => len,
    "first" => first,
    "last"  => last,
    "rest"  => rest,
    "push"  => push,
    "puts"  => puts,
}

/// Looks up a builtin by name.
///
/// The evaluator consults this after identifier lookup misses the
/// environment chain, so a user binding named `len` shadows the builtin.
///
/// # Example
/// ```
/// use capuchin::interpreter::evaluator::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("pop").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| {
                     Value::Builtin(Builtin { name: builtin.name,
                                              func: builtin.func, })
                 })
}

/// Checks that a builtin received exactly the expected number of
/// arguments.
const fn check_arity(arguments: &[Value], want: usize) -> Result<(), RuntimeError> {
    if arguments.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongNumberOfArguments { got: arguments.len(),
                                                   want })
    }
}

/// `len(x)`: the byte length of a string or the element count of an
/// array.
fn len(arguments: Vec<Value>) -> Value {
    if let Err(error) = check_arity(&arguments, 1) {
        return error.into();
    }

    match &arguments[0] {
        Value::Str(value) => Value::Integer(i64::try_from(value.len()).unwrap_or(i64::MAX)),
        Value::Array(elements) => {
            Value::Integer(i64::try_from(elements.len()).unwrap_or(i64::MAX))
        },
        other => RuntimeError::UnsupportedArgument { builtin:   "len",
                                                     type_name: other.type_name(), }.into(),
    }
}

/// `first(xs)`: the first element of an array, or `null` when empty.
fn first(arguments: Vec<Value>) -> Value {
    if let Err(error) = check_arity(&arguments, 1) {
        return error.into();
    }

    match &arguments[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => RuntimeError::WrongArgumentType { builtin:   "first",
                                                   expected:  "ARRAY",
                                                   type_name: other.type_name(), }.into(),
    }
}

/// `last(xs)`: the last element of an array, or `null` when empty.
fn last(arguments: Vec<Value>) -> Value {
    if let Err(error) = check_arity(&arguments, 1) {
        return error.into();
    }

    match &arguments[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => RuntimeError::WrongArgumentType { builtin:   "last",
                                                   expected:  "ARRAY",
                                                   type_name: other.type_name(), }.into(),
    }
}

/// `rest(xs)`: a new array holding everything but the first element, or
/// `null` for an empty array. The argument is untouched.
fn rest(arguments: Vec<Value>) -> Value {
    if let Err(error) = check_arity(&arguments, 1) {
        return error.into();
    }

    match &arguments[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        },
        other => RuntimeError::WrongArgumentType { builtin:   "rest",
                                                   expected:  "ARRAY",
                                                   type_name: other.type_name(), }.into(),
    }
}

/// `push(xs, x)`: a new array with `x` appended. The original array is
/// untouched; arrays are immutable like every other value.
fn push(arguments: Vec<Value>) -> Value {
    if let Err(error) = check_arity(&arguments, 2) {
        return error.into();
    }

    match &arguments[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(arguments[1].clone());
            Value::Array(Rc::new(extended))
        },
        other => RuntimeError::WrongArgumentType { builtin:   "push",
                                                   expected:  "ARRAY",
                                                   type_name: other.type_name(), }.into(),
    }
}

/// `puts(...)`: prints each argument's rendering on its own line and
/// yields `null`. Takes any number of arguments.
fn puts(arguments: Vec<Value>) -> Value {
    for argument in &arguments {
        println!("{argument}");
    }
    Value::Null
}
