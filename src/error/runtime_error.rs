use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// Runtime errors are not carried in a `Result`: the evaluator wraps them in
/// an error *value* that participates in normal evaluation flow and
/// short-circuits every enclosing expression and statement. The rendered
/// messages are part of the language's observable surface.
pub enum RuntimeError {
    /// A name was not bound in any reachable scope or in the builtin table.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A prefix operator was applied to a value outside its domain.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type tag of the operand.
        right:    &'static str,
    },
    /// An infix operator was applied to same-typed values outside its
    /// domain.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// An infix operator was applied to values of two different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// Something other than a function or builtin appeared as a callee.
    NotAFunction {
        /// Type tag of the called value.
        type_name: &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A builtin received the wrong number of arguments.
    WrongNumberOfArguments {
        /// The number of arguments supplied.
        got:  usize,
        /// The number of arguments required.
        want: usize,
    },
    /// A builtin received an argument type it has no behavior for.
    UnsupportedArgument {
        /// The builtin's name.
        builtin:   &'static str,
        /// Type tag of the offending argument.
        type_name: &'static str,
    },
    /// A builtin requires a specific argument type.
    WrongArgumentType {
        /// The builtin's name.
        builtin:   &'static str,
        /// The required type tag.
        expected:  &'static str,
        /// Type tag of the offending argument.
        type_name: &'static str,
    },
    /// A value that cannot serve as a hash key appeared in key position.
    UnusableAsHashKey {
        /// Type tag of the offending key.
        type_name: &'static str,
    },
    /// The index operator was applied to a value that is not indexable.
    IndexNotSupported {
        /// Type tag of the indexed value.
        type_name: &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },

            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },

            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },

            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::WrongNumberOfArguments { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` not supported, got {type_name}")
            },

            Self::WrongArgumentType { builtin,
                                      expected,
                                      type_name, } => {
                write!(f, "argument to `{builtin}` must be {expected}, got {type_name}")
            },

            Self::UnusableAsHashKey { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            },

            Self::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
