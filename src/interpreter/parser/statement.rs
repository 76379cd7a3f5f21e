use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// Only `let` and `return` open dedicated statement forms; everything
    /// else is an expression statement. Returns `None` when the production
    /// failed, in which case the diagnostic has already been recorded.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <name> = <expression> [;]`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(&Token::Ident(String::new())) {
            return None;
        }
        let name = match &self.current {
            Token::Ident(name) => name.clone(),
            _ => unreachable!(),
        };

        if !self.expect_peek(&Token::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expression> [;]`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Some(Statement::Return { value })
    }

    /// Parses a bare expression used as a statement, with an optional
    /// trailing semicolon.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Some(Statement::Expression { expression })
    }

    /// Parses the statements of a brace-delimited block.
    ///
    /// The current token is the opening `{` on entry and the closing `}` on
    /// exit. Reading stops at `}` or end of input, whichever comes first.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.advance();

        while self.current != Token::Rbrace && self.current != Token::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        BlockStatement { statements }
    }
}
