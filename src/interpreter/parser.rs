/// Core parser machinery.
///
/// Declares the `Parser` itself, the precedence ladder, token bookkeeping
/// (`current`/`peek`), and error accumulation.
pub mod core;
/// Expression parsing.
///
/// Prefix and infix dispatch plus the composite productions: grouping,
/// conditionals, function literals, calls, arrays, indexing, and hashes.
pub mod expression;
/// Statement parsing.
///
/// `let`, `return`, expression statements, and brace-delimited blocks.
pub mod statement;

pub use self::core::Parser;
