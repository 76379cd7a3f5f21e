use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, index, infix, prefix},
        value::{
            core::{Function, Value},
            environment::{Env, Environment},
        },
    },
};

/// Evaluates a whole program against an environment.
///
/// Statements run in order. A `return` at the top level stops the program
/// and yields the *unwrapped* inner value; an error value stops it and
/// propagates as-is. Otherwise the result is the value of the last
/// statement, or `None` when the last statement produced no value (a
/// binding, or an empty program).
///
/// The environment is shared and mutable: in the REPL the same environment
/// is handed back in on every line, which is what makes earlier bindings
/// visible to later inputs.
///
/// # Example
/// ```
/// use capuchin::{
///     interpreter::{
///         evaluator::core::eval_program,
///         lexer::Lexer,
///         parser::Parser,
///         value::{core::Value, environment::Environment},
///     },
/// };
///
/// let mut parser = Parser::new(Lexer::new("let x = 5 * 5 + 10; x;"));
/// let program = parser.parse_program();
/// let env = Environment::new();
///
/// assert_eq!(eval_program(&program, &env), Some(Value::Integer(35)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> Option<Value> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Some(Value::ReturnValue(value)) => return Some(*value),
            Some(error @ Value::Error(_)) => return Some(error),
            other => result = other,
        }
    }

    result
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_program`], a `ReturnValue` passes through *still wrapped*,
/// so the call boundary that eventually receives it can tell an early
/// return from a block that merely ended. Errors short-circuit identically.
pub fn eval_block(block: &BlockStatement, env: &Env) -> Option<Value> {
    let mut result = None;

    for statement in &block.statements {
        match eval_statement(statement, env) {
            Some(value @ (Value::ReturnValue(_) | Value::Error(_))) => return Some(value),
            other => result = other,
        }
    }

    result
}

/// Evaluates a single statement.
///
/// `let` evaluates its value and binds it in the innermost scope, yielding
/// no value. `return` wraps its operand for unwinding. An expression
/// statement yields the expression's value.
fn eval_statement(statement: &Statement, env: &Env) -> Option<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return Some(value);
            }
            env.borrow_mut().bind(name, value);
            None
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return Some(value);
            }
            Some(Value::ReturnValue(Box::new(value)))
        },
        Statement::Expression { expression } => Some(eval_expression(expression, env)),
    }
}

/// Evaluates an expression to a value.
///
/// This is the heart of the interpreter: one recursive walk that handles
/// every expression variant. Any error value produced by a subexpression
/// returns immediately; errors never become operands.
pub fn eval_expression(expression: &Expression, env: &Env) -> Value {
    match expression {
        Expression::IntegerLiteral { value } => Value::Integer(*value),
        Expression::BooleanLiteral { value } => Value::Boolean(*value),
        Expression::StringLiteral { value } => Value::Str(value.clone()),
        Expression::Identifier { name } => eval_identifier(name, env),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            prefix::eval_prefix_expression(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right, } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            infix::eval_infix_expression(*operator, left, right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                               body:       body.clone(),
                                               env:        Rc::clone(env), }))
        },
        Expression::Call { function,
                           arguments, } => {
            let callee = eval_expression(function, env);
            if callee.is_error() {
                return callee;
            }
            let arguments = match eval_expressions(arguments, env) {
                Ok(arguments) => arguments,
                Err(error) => return error,
            };
            apply_function(&callee, arguments)
        },
        Expression::ArrayLiteral { elements } => match eval_expressions(elements, env) {
            Ok(elements) => Value::Array(Rc::new(elements)),
            Err(error) => error,
        },
        Expression::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            index::eval_index_expression(&left, &index)
        },
        Expression::HashLiteral { pairs } => index::eval_hash_literal(pairs, env),
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
fn eval_identifier(name: &str, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtin::lookup(name) {
        return builtin;
    }
    Value::Error(RuntimeError::IdentifierNotFound { name: name.to_string(), })
}

/// Evaluates a conditional expression.
///
/// Only `false` and `null` are falsy. A false condition with no
/// alternative yields `null`, as does a taken branch whose block produced
/// no value.
fn eval_if_expression(condition: &Expression,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Env)
                      -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block(consequence, env).unwrap_or(Value::Null)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env).unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

/// Evaluates a list of expressions left to right.
///
/// The first error value aborts the walk; later expressions are not
/// evaluated at all.
fn eval_expressions(expressions: &[Expression], env: &Env) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }

    Ok(values)
}

/// Calls a value with already-evaluated arguments.
///
/// For a function value, a fresh scope is created *enclosing the captured
/// environment* (not the caller's), parameters are bound positionally, and
/// any `ReturnValue` the body produced is unwrapped exactly once. Excess
/// arguments are ignored; missing parameters stay unbound and surface as
/// `identifier not found` on use.
///
/// Builtins receive the argument values verbatim and their result is
/// returned untouched.
pub fn apply_function(callee: &Value, arguments: Vec<Value>) -> Value {
    match callee {
        Value::Function(function) => {
            let scope = Environment::enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                scope.borrow_mut().bind(parameter, argument);
            }
            unwrap_return(eval_block(&function.body, &scope))
        },
        Value::Builtin(builtin) => (builtin.func)(arguments),
        _ => Value::Error(RuntimeError::NotAFunction { type_name: callee.type_name(), }),
    }
}

/// Strips one `ReturnValue` wrapper off a call result, if present.
///
/// Unwrapping only here, never inside block evaluation, is what confines
/// a `return` to its own function instead of tearing down every caller.
fn unwrap_return(result: Option<Value>) -> Value {
    match result {
        Some(Value::ReturnValue(value)) => *value,
        Some(value) => value,
        None => Value::Null,
    }
}

/// The truthiness rule used by `if` and `!`: `false` and `null` are false,
/// every other value is true.
///
/// # Example
/// ```
/// use capuchin::interpreter::{evaluator::core::is_truthy, value::core::Value};
///
/// assert!(is_truthy(&Value::Integer(0)));
/// assert!(is_truthy(&Value::Str(String::new())));
/// assert!(!is_truthy(&Value::Boolean(false)));
/// assert!(!is_truthy(&Value::Null));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Boolean(false) | Value::Null)
}
