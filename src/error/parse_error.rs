#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The rendered messages are part of the language's observable surface and
/// are exercised by the test suite; changing them is a breaking change.
pub enum ParseError {
    /// The token after the current one did not match what the grammar
    /// requires at this point.
    UnexpectedToken {
        /// The token kind the parser required.
        expected: String,
        /// The token kind actually found.
        found:    String,
    },
    /// A token appeared in prefix position that no expression can start
    /// with.
    NoPrefixParseFn {
        /// The offending token kind.
        token: String,
    },
    /// An integer literal did not fit a signed 64-bit integer.
    InvalidIntegerLiteral {
        /// The raw literal as written in the source.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead.")
            },
            Self::NoPrefixParseFn { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// A non-empty batch of parse errors from a single parse.
///
/// The parser keeps consuming after a failed production to surface as many
/// errors per program as possible; this wrapper carries the whole batch
/// across API boundaries that expect a single `std::error::Error` value.
///
/// # Example
/// ```
/// use capuchin::parse;
///
/// let errors = parse("let = 5;").unwrap_err();
///
/// assert_eq!(errors.0[0].to_string(),
///            "expected next token to be IDENT, got = instead.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorList(pub Vec<ParseError>);

impl std::fmt::Display for ParseErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrorList {}
