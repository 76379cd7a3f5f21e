/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, performs all supported
/// operations, manages environments and closures, and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, first-class functions, and control flow.
/// - Propagates runtime errors as values that short-circuit evaluation.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator, delimiter, or keyword. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles integer and string literals, identifiers, and operators.
/// - Never fails: unknown input becomes `ILLEGAL` tokens and the end of the
///   input yields `EOF` forever.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, honoring operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, accumulating every error it can find.
/// - Guarantees a program with parse errors is never handed to the
///   evaluator.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution, such as
/// integers, booleans, strings, arrays, hashes, and functions, together
/// with the environments bindings live in.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides type tags and the canonical renderings the REPL prints.
/// - Implements lexical environments and closure capture.
pub mod value;
