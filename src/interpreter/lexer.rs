use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`.
    ///
    /// The raw digit run is kept as written; the parser converts it and
    /// reports literals that do not fit a 64-bit integer.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens. The payload is the content between the quotes,
    /// with no escape processing.
    #[token("\"", lex_string)]
    Str(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `!`
    #[token("!")]
    Bang,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `[`
    #[token("[")]
    Lbracket,
    /// `]`
    #[token("]")]
    Rbracket,

    /// Unrecognized characters. The payload is the offending character.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
    /// End of input. Never produced by the token patterns themselves; the
    /// [`Lexer`] synthesizes it once the source is exhausted and keeps
    /// returning it indefinitely.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Eof,
}

/// Consumes a string literal after its opening quote.
///
/// Everything up to the next `"` becomes the token payload; the closing
/// quote is consumed but not included. An unterminated string runs to the
/// end of the input.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let remainder = lex.remainder();
    match remainder.find('"') {
        Some(end) => {
            let content = remainder[..end].to_string();
            lex.bump(end + 1);
            content
        },
        None => {
            let content = remainder.to_string();
            lex.bump(remainder.len());
            content
        },
    }
}

impl Token {
    /// Returns the exact source fragment this token was built from.
    ///
    /// For end of input the literal is empty.
    ///
    /// # Example
    /// ```
    /// use capuchin::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Function.literal(), "fn");
    /// assert_eq!(Token::Ident("adder".to_string()).literal(), "adder");
    /// assert_eq!(Token::Eof.literal(), "");
    /// ```
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Ident(literal)
            | Self::Int(literal)
            | Self::Str(literal)
            | Self::Illegal(literal) => literal,
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Bang => "!",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Lbracket => "[",
            Self::Rbracket => "]",
            Self::Eof => "",
        }
    }
}

impl std::fmt::Display for Token {
    /// Writes the token *kind*, the form used by parse diagnostics:
    /// punctuation prints as itself, everything else as its kind name
    /// (`IDENT`, `INT`, `STRING`, `FUNCTION`, ...).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            punctuation => punctuation.literal(),
        };
        write!(f, "{kind}")
    }
}

/// A pull-based lexer over a source string.
///
/// The single operation [`next_token`](Lexer::next_token) returns the next
/// token and advances. Lexing never fails: unknown bytes come back as
/// [`Token::Illegal`] and the end of input yields [`Token::Eof`] forever.
///
/// # Example
/// ```
/// use capuchin::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token(), Token::Let);
/// assert_eq!(lexer.next_token(), Token::Ident("five".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Int("5".to_string()));
/// assert_eq!(lexer.next_token(), Token::Semicolon);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source), }
    }

    /// Returns the next token and advances the cursor.
    ///
    /// Whitespace is skipped. Once the source is exhausted every further
    /// call returns [`Token::Eof`].
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            // The catch-all pattern makes the token set total; keep the error
            // arm so a regression in the patterns still surfaces as an
            // ILLEGAL token instead of a panic.
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}
