use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Evaluates a binary operation on already-evaluated operands.
///
/// Dispatch order matters and is observable:
///
/// 1. Two integers: full arithmetic and comparison.
/// 2. Two strings: concatenation only.
/// 3. `==` / `!=` on anything else compares identity, which for the
///    canonical booleans and `null` is exactly value equality. Mixed-type
///    equality is `false`, not an error.
/// 4. Any other operator on differing types is a type mismatch; on a
///    matching type outside the operator's domain it is an unknown
///    operator.
///
/// # Example
/// ```
/// use capuchin::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::eval_infix_expression, value::core::Value},
/// };
///
/// let sum = eval_infix_expression(InfixOperator::Add, Value::Integer(2), Value::Integer(3));
/// assert_eq!(sum, Value::Integer(5));
///
/// let mismatch =
///     eval_infix_expression(InfixOperator::Add, Value::Integer(5), Value::Boolean(true));
/// assert_eq!(mismatch.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
#[must_use]
pub fn eval_infix_expression(operator: InfixOperator, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ => match operator {
            InfixOperator::Equal => Value::Boolean(left == right),
            InfixOperator::NotEqual => Value::Boolean(left != right),
            _ if left.type_name() != right.type_name() => {
                Value::Error(RuntimeError::TypeMismatch { left: left.type_name(),
                                                          operator,
                                                          right: right.type_name() })
            },
            _ => Value::Error(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                                   operator,
                                                                   right: right.type_name() }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow (two's-complement, like the host).
/// Division by zero is diagnosed instead of trapping the host process.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Value {
    match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                Value::Error(RuntimeError::DivisionByZero)
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        },
        InfixOperator::Less => Value::Boolean(left < right),
        InfixOperator::Greater => Value::Boolean(left > right),
        InfixOperator::Equal => Value::Boolean(left == right),
        InfixOperator::NotEqual => Value::Boolean(left != right),
    }
}

/// String operations: `+` concatenates, nothing else is defined.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> Value {
    match operator {
        InfixOperator::Add => Value::Str(format!("{left}{right}")),
        _ => Value::Error(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                               operator,
                                                               right: "STRING" }),
    }
}
