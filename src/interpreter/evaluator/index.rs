use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::eval_expression,
        value::{
            core::{HashKey, HashPair, Value},
            environment::Env,
        },
    },
};

/// Evaluates an index operation on already-evaluated operands.
///
/// Arrays take integer indices; anything outside `0..len` evaluates to
/// `null` rather than failing. Hashes take any hashable key, and a missing
/// key also yields `null`. Indexing any other value is an error.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use capuchin::interpreter::{evaluator::index::eval_index_expression, value::core::Value};
///
/// let array = Value::Array(Rc::new(vec![Value::Integer(10), Value::Integer(20)]));
///
/// assert_eq!(eval_index_expression(&array, &Value::Integer(1)),
///            Value::Integer(20));
/// assert_eq!(eval_index_expression(&array, &Value::Integer(9)), Value::Null);
/// ```
#[must_use]
pub fn eval_index_expression(left: &Value, index: &Value) -> Value {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            eval_array_index(elements, *position)
        },
        (Value::Hash(pairs), key) => eval_hash_index(pairs, key),
        _ => Value::Error(RuntimeError::IndexNotSupported { type_name: left.type_name(), }),
    }
}

/// Positional access into an array; out-of-range positions yield `null`.
fn eval_array_index(elements: &[Value], position: i64) -> Value {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position).cloned())
                             .unwrap_or(Value::Null)
}

/// Keyed access into a hash; unhashable keys are diagnosed, missing keys
/// yield `null`.
fn eval_hash_index(pairs: &HashMap<HashKey, HashPair>, key: &Value) -> Value {
    match key.hash_key() {
        Some(hash_key) => pairs.get(&hash_key)
                               .map_or(Value::Null, |pair| pair.value.clone()),
        None => Value::Error(RuntimeError::UnusableAsHashKey { type_name: key.type_name(), }),
    }
}

/// Evaluates a hash literal's pairs in source order.
///
/// Keys and values are evaluated alternately, left to right, and any error
/// value short-circuits the whole literal. Keys must be hashable; a later
/// duplicate key silently replaces an earlier one.
#[must_use]
pub fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> Value {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }

        let Some(hash_key) = key.hash_key() else {
            return Value::Error(RuntimeError::UnusableAsHashKey { type_name: key.type_name(), });
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        map.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(Rc::new(map))
}
