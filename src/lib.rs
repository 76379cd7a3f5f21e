//! # capuchin
//!
//! capuchin is an interpreter for a small, dynamically typed,
//! expression-oriented programming language, written in Rust. Programs are
//! lexed into tokens, parsed into an AST by a Pratt parser, and executed
//! directly by walking the tree. The language has first-class functions
//! with closures, integers, booleans, strings, arrays, and hashes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseErrorList,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::Parser,
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator; every node can reconstruct
/// its canonical, fully parenthesized source form.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders the canonical reconstruction used by diagnostics and tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Parse errors are accumulated and reported together;
/// runtime errors are carried inside the value representation and
/// short-circuit evaluation.
///
/// # Responsibilities
/// - Defines error enums for each phase with canonical messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line per turn, reports parse errors under a banner, and
/// prints the rendering of each evaluated result. The environment persists
/// across lines for the whole session.
pub mod repl;

/// Parses a source string into a program.
///
/// # Errors
/// Returns every syntax error found, in source order. A program that
/// parses with errors must not be evaluated, so no partial AST is exposed
/// alongside them.
///
/// # Examples
/// ```
/// use capuchin::parse;
///
/// let program = parse("a + b * c").unwrap();
/// assert_eq!(program.to_string(), "(a + (b * c))");
///
/// let errors = parse("let 5 = x;").unwrap_err();
/// assert_eq!(errors.0[0].to_string(),
///            "expected next token to be IDENT, got INT instead.");
/// ```
pub fn parse(source: &str) -> Result<ast::Program, ParseErrorList> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(ParseErrorList(parser.into_errors()))
    }
}

/// Parses and evaluates a source string against an existing environment.
///
/// This is the REPL building block: hand in the same environment on every
/// call and bindings persist between calls. Runtime failures come back as
/// an ordinary [`Value::Error`] result, not through the `Err` channel.
/// `None` means the program produced no value (for example, a lone `let`).
///
/// # Errors
/// Returns the accumulated syntax errors when the source fails to parse;
/// nothing is evaluated in that case.
///
/// # Examples
/// ```
/// use capuchin::{eval_source, interpreter::value::{core::Value, environment::Environment}};
///
/// let env = Environment::new();
///
/// assert_eq!(eval_source("let x = 2;", &env).unwrap(), None);
/// assert_eq!(eval_source("x + 3", &env).unwrap(), Some(Value::Integer(5)));
/// ```
pub fn eval_source(source: &str, env: &Env) -> Result<Option<Value>, ParseErrorList> {
    let program = parse(source)?;
    Ok(eval_program(&program, env))
}

/// Parses and executes a complete script in a fresh environment.
///
/// With `auto_print` set, the value of the script's final statement (if
/// any) is printed to standard output, the scripting analog of the REPL
/// echoing each result.
///
/// # Errors
/// Returns the accumulated syntax errors if parsing fails, or the runtime
/// error if evaluation produced one.
///
/// # Examples
/// ```
/// use capuchin::run_script;
///
/// let source = r#"
///     let greet = fn(name) { "Hello " + name };
///     greet("World");
/// "#;
/// assert!(run_script(source, false).is_ok());
///
/// // 'y' is not bound anywhere.
/// assert!(run_script("let x = y + 1;", false).is_err());
/// ```
pub fn run_script(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::new();
    let program = parse(source)?;

    match eval_program(&program, &env) {
        Some(Value::Error(error)) => Err(Box::new(error)),
        Some(value) if auto_print => {
            println!("{value}");
            Ok(())
        },
        _ => Ok(()),
    }
}
