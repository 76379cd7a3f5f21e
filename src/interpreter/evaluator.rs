/// Core evaluation logic.
///
/// Contains the recursive tree walk over statements and expressions,
/// return-value unwinding, error short-circuiting, and the function-call
/// machinery.
pub mod core;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod prefix;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: integer arithmetic and
/// comparison, string concatenation, and identity equality.
pub mod infix;

/// Index and hash evaluation.
///
/// Array indexing, hash indexing, and hash literal construction.
pub mod index;

/// Builtin functions.
///
/// The process-wide table of native functions consulted when identifier
/// lookup misses the environment.
pub mod builtin;
