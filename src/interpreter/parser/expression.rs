use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators. Call and index
/// expressions are infix forms too, but they dispatch on their own tokens
/// (`(` and `[`) rather than through this table.
#[must_use]
pub const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Asterisk => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Lt => Some(InfixOperator::Less),
        Token::Gt => Some(InfixOperator::Greater),
        Token::Eq => Some(InfixOperator::Equal),
        Token::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

/// Maps a token to its corresponding prefix operator.
#[must_use]
pub const fn prefix_operator(token: &Token) -> Option<PrefixOperator> {
    match token {
        Token::Bang => Some(PrefixOperator::Not),
        Token::Minus => Some(PrefixOperator::Negate),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses an expression at the given precedence level.
    ///
    /// This is the central Pratt routine: parse a prefix form for the
    /// current token, then keep folding infix forms onto it while the
    /// upcoming operator binds tighter than `precedence`. A semicolon at
    /// the current position always ends the expression.
    ///
    /// Returns `None` when no expression could be built; the diagnostic has
    /// already been recorded by whichever production failed.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while self.current != Token::Semicolon && precedence < Precedence::of(&self.peek) {
            if !Self::parses_infix(&self.peek) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Parses the prefix form introduced by the current token.
    ///
    /// Records the canonical "no prefix parse function" error when the
    /// current token cannot start an expression.
    fn parse_prefix(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token {
            Token::Ident(name) => Some(Expression::Identifier { name }),
            Token::Int(literal) => self.parse_integer_literal(&literal),
            Token::Str(value) => Some(Expression::StringLiteral { value }),
            Token::True => Some(Expression::BooleanLiteral { value: true }),
            Token::False => Some(Expression::BooleanLiteral { value: false }),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::Lparen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::Lbracket => self.parse_array_literal(),
            Token::Lbrace => self.parse_hash_literal(),
            token => {
                self.errors
                    .push(ParseError::NoPrefixParseFn { token: token.to_string(), });
                None
            },
        }
    }

    /// Whether a token has an infix form registered for it.
    const fn parses_infix(token: &Token) -> bool {
        infix_operator(token).is_some() || matches!(token, Token::Lparen | Token::Lbracket)
    }

    /// Parses the infix form for the current token, with `left` already
    /// parsed.
    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current {
            Token::Lparen => self.parse_call_expression(left),
            Token::Lbracket => self.parse_index_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    /// Converts the raw digit run of an integer literal.
    ///
    /// The lexer guarantees the run contains only digits, so the only way
    /// conversion can fail is a value outside the 64-bit range.
    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expression> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { value }),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidIntegerLiteral { literal: literal.to_string(), });
                None
            },
        }
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at `PREFIX` precedence, so prefix operators
    /// bind tighter than any binary operator: `-a * b` is `((-a) * b)`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = prefix_operator(&self.current)?;
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right) })
    }

    /// Parses `<left> <operator> <right>` for a binary operator.
    ///
    /// The right side is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = infix_operator(&self.current)?;
        let precedence = Precedence::of(&self.current);
        self.advance();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// Parses `( <expression> )`. Grouping produces no node of its own; the
    /// parentheses only reset the precedence context.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Rparen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `if (<condition>) <block>` with an optional `else <block>`.
    ///
    /// There is no `else if` form in the grammar; chains are written by
    /// nesting an `if` expression inside the alternative block.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(&Token::Lparen) {
            return None;
        }
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Rparen) {
            return None;
        }
        if !self.expect_peek(&Token::Lbrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek == Token::Else {
            self.advance();
            if !self.expect_peek(&Token::Lbrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses `fn (<parameters>) <block>`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(&Token::Lparen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::Lbrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses zero or more comma-separated parameter names up to the
    /// closing `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek == Token::Rparen {
            self.advance();
            return Some(parameters);
        }

        if !self.expect_peek(&Token::Ident(String::new())) {
            return None;
        }
        parameters.push(self.current.literal().to_string());

        while self.peek == Token::Comma {
            self.advance();
            if !self.expect_peek(&Token::Ident(String::new())) {
                return None;
            }
            parameters.push(self.current.literal().to_string());
        }

        if !self.expect_peek(&Token::Rparen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses the argument list of a call, with `function` already parsed
    /// as the callee. `(` registers as an infix token at `CALL` precedence,
    /// which is what makes `add(1, 2)` bind tighter than any operator
    /// around it.
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(&Token::Rparen)?;

        Some(Expression::Call { function: Box::new(function),
                                arguments })
    }

    /// Parses `[<elements>]`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(&Token::Rbracket)?;

        Some(Expression::ArrayLiteral { elements })
    }

    /// Parses `<left>[<index>]`.
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.advance();

        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Rbracket) {
            return None;
        }

        Some(Expression::Index { left:  Box::new(left),
                                 index: Box::new(index), })
    }

    /// Parses `{<key>: <value>, ...}` with pairs in source order.
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while self.peek != Token::Rbrace {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.advance();

            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek != Token::Rbrace && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::Rbrace) {
            return None;
        }

        Some(Expression::HashLiteral { pairs })
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// Shared by call arguments and array literals. An immediately
    /// encountered terminator produces an empty list.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek == *end {
            self.advance();
            return Some(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Token::Comma {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
