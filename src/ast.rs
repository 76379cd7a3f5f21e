use std::fmt;

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expression` covers all types of expressions, from literals and
/// identifiers to function literals, calls, arithmetic, conditionals,
/// arrays, and hashes. Each variant models a distinct syntactic construct.
/// Every expression produces a value when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The constant value.
        value: i64,
    },
    /// A boolean literal value: `true` or `false`.
    BooleanLiteral {
        /// The constant value.
        value: bool,
    },
    /// A string literal. No escape sequences exist; the value is the raw
    /// content between the quotes.
    StringLiteral {
        /// The constant value.
        value: String,
    },
    /// A prefix operation (e.g. `!ok`, `-x`).
    Prefix {
        /// The prefix operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression: `if (<condition>) { ... } else { ... }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated otherwise.
        alternative: Option<BlockStatement>,
    },
    /// Function literal: `fn(<params>) { ... }`. Functions are first-class
    /// values and capture the environment they are written in.
    FunctionLiteral {
        /// The parameter names.
        parameters: Vec<String>,
        /// The body evaluated when the function is called.
        body:       BlockStatement,
    },
    /// Call expression: `<callee>(<arguments>)`.
    Call {
        /// The expression being called; an identifier or a function literal.
        function:  Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// Array literal expression: `[1, 2, 3]`.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
    },
    /// Index expression: `collection[key]`.
    Index {
        /// The collection being indexed.
        left:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
    },
    /// Hash literal expression: `{"one": 1}`. Pairs keep their source order
    /// for reconstruction.
    HashLiteral {
        /// Key/value expression pairs.
        pairs: Vec<(Self, Self)>,
    },
}

/// Represents a statement.
///
/// Statements are the units a program is made of; blocks nest further
/// statements inside expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound. Always non-empty.
        name:  String,
        /// The bound value.
        value: Expression,
    },
    /// An early return from the enclosing function.
    Return {
        /// The returned value.
        value: Expression,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expression: Expression,
    },
}

/// A brace-delimited sequence of statements, as found in `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// The root of every parse: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns the literal of the token that introduced the first statement,
    /// or the empty string for an empty program. Used only by diagnostics.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Statement::token_literal)
    }
}

impl Statement {
    /// Returns the literal of the token that introduced this statement.
    /// Used only by diagnostics.
    ///
    /// # Example
    /// ```
    /// use capuchin::ast::{Expression, Statement};
    ///
    /// let statement = Statement::Let { name:  "x".to_string(),
    ///                                  value: Expression::IntegerLiteral { value: 5 }, };
    ///
    /// assert_eq!(statement.token_literal(), "let");
    /// ```
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression { expression } => expression.token_literal(),
        }
    }
}

impl Expression {
    /// Returns the literal of the token that introduced this expression.
    /// Used only by diagnostics.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier { name } => name.clone(),
            Self::IntegerLiteral { value } => value.to_string(),
            Self::BooleanLiteral { value } => value.to_string(),
            Self::StringLiteral { value } => value.clone(),
            Self::Prefix { operator, .. } => operator.to_string(),
            Self::Infix { operator, .. } => operator.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::FunctionLiteral { .. } => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::ArrayLiteral { .. } | Self::Index { .. } => "[".to_string(),
            Self::HashLiteral { .. } => "{".to_string(),
        }
    }
}

impl fmt::Display for Program {
    /// Writes the canonical reconstruction of the whole program: the
    /// concatenation of its statements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for Expression {
    /// Writes the canonical reconstruction of the expression.
    ///
    /// Prefix and infix operations are fully parenthesized, so precedence
    /// and associativity become visible in the output. Keywords reattach
    /// without enclosing parentheses.
    ///
    /// # Example
    /// ```
    /// use capuchin::{interpreter::lexer::Lexer, interpreter::parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("a + b * c"));
    /// let program = parser.parse_program();
    ///
    /// assert_eq!(program.to_string(), "(a + (b * c))");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function,
                         arguments, } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
            Self::ArrayLiteral { elements } => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}:{value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}
