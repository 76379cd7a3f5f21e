/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code into an
/// AST. Parse errors are accumulated by the parser and reported together; a
/// program with any parse error is never evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Unlike
/// parse errors, runtime errors travel through evaluation as ordinary
/// values and surface as the result of the program.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrorList};
pub use runtime_error::RuntimeError;
