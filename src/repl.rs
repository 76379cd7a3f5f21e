use std::io::{BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::Parser,
        value::environment::Environment,
    },
};

/// The prompt printed before every line of input.
pub const PROMPT: &str = ">> ";

const FACE: &str = r#"          .-"""-.
         / .===. \
         \/ 6 6 \/
         ( \___/ )
   ______ooo__V__ooo______
"#;

/// Runs the read-eval-print loop until the input ends.
///
/// One line is read per turn. Parse errors are printed under a banner with
/// each message indented, and the line is discarded; otherwise the program
/// is evaluated against an environment that persists for the whole session,
/// and the result's rendering is printed. Statements that produce no value
/// (such as `let`) print nothing.
///
/// # Errors
/// Returns any I/O error raised by the underlying reader or writer.
///
/// # Example
/// ```
/// use capuchin::repl;
///
/// let input = b"let double = fn(x) { x * 2 };\ndouble(21)\n" as &[u8];
/// let mut output = Vec::new();
///
/// repl::start(input, &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("42"));
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> std::io::Result<()> {
    let env = Environment::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parse_errors(&mut output, parser.errors())?;
            continue;
        }

        if let Some(value) = eval_program(&program, &env) {
            writeln!(output, "{value}")?;
        }
    }
}

/// Prints the banner and the accumulated parse errors, one per line,
/// indented.
fn print_parse_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> std::io::Result<()> {
    write!(output, "{FACE}")?;
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    writeln!(output, " parse errors:")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
