use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::is_truthy, value::core::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// - `!` negates truthiness and always yields a boolean: `!true` is
///   `false`, `!null` is `true`, and any other value negates to `false`.
/// - `-` is defined for integers only; negation wraps on `i64::MIN`.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::eval_prefix_expression, value::core::Value},
/// };
///
/// let negated = eval_prefix_expression(PrefixOperator::Negate, &Value::Integer(5));
/// assert_eq!(negated, Value::Integer(-5));
///
/// let truthy = eval_prefix_expression(PrefixOperator::Not, &Value::Integer(5));
/// assert_eq!(truthy, Value::Boolean(false));
/// ```
#[must_use]
pub fn eval_prefix_expression(operator: PrefixOperator, right: &Value) -> Value {
    match operator {
        PrefixOperator::Not => Value::Boolean(!is_truthy(right)),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => Value::Integer(value.wrapping_neg()),
            _ => Value::Error(RuntimeError::UnknownPrefixOperator { operator,
                                                                    right: right.type_name(), }),
        },
    }
}
