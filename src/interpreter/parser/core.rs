use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Binding strength of an infix position, lowest to highest.
///
/// `parse_expression` keeps extending the current left-hand expression for
/// as long as the next token binds more strongly than the level it was
/// called with. The derived ordering of the variants is the precedence
/// table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level; binds nothing.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<`, `>`, `<=` and `>=`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix operators (`!x`, `-x`).
    Prefix,
    /// Call parentheses (`f(x)`).
    Call,
    /// Index brackets (`xs[0]`).
    Index,
}

/// Returns the infix binding strength of a token.
///
/// Tokens that never start an infix construct report [`Precedence::Lowest`],
/// which makes the expression loop stop in front of them.
#[must_use]
pub const fn token_precedence(token: &Token) -> Precedence {
    match token {
        Token::Equal | Token::NotEqual => Precedence::Equals,
        Token::Less | Token::Greater | Token::LessEqual | Token::GreaterEqual => {
            Precedence::LessGreater
        },
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Asterisk | Token::Slash => Precedence::Product,
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Builds one [`Program`] from a token sequence.
///
/// The parser operates with exactly one token of lookahead. It never aborts
/// on malformed input; instead every unmet expectation appends a message to
/// the error list and the offending construct yields no node. Parsing then
/// continues from wherever the cursor was left, so the resulting program can
/// be structurally incomplete.
///
/// Callers must not evaluate the resulting program when the error list is
/// non-empty.
pub struct Parser {
    tokens:   Vec<(Token, usize)>,
    position: usize,
    errors:   Vec<ParseError>,
}

impl Parser {
    /// Creates a parser over a tokenized input.
    ///
    /// # Example
    /// ```
    /// use banyan::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(tokenize("1 + 2 * 3").unwrap());
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "(1 + (2 * 3))");
    /// ```
    #[must_use]
    pub const fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self { tokens,
               position: 0,
               errors: Vec::new() }
    }

    /// Parses all statements up to the end of input.
    ///
    /// Statements that fail to parse are dropped from the program; the
    /// failure is recorded in the error list instead.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current_token().is_some() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        Program { statements }
    }

    /// The syntax errors collected so far, in the order they occurred.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its collected syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses a full expression starting at the current token.
    ///
    /// The prefix rule for the current token produces the initial left-hand
    /// expression; if no rule exists, a "no prefix parse function" error is
    /// recorded. The loop then keeps consuming infix constructs while the
    /// next token is not a statement terminator and binds more strongly than
    /// `min_precedence`. Each infix rule re-enters this function at its own
    /// operator's precedence, which makes every binary operator
    /// left-associative.
    ///
    /// # Parameters
    /// - `min_precedence`: Level below which the loop stops extending.
    ///
    /// # Returns
    /// The parsed expression, or `None` when a rule failed (the failure is
    /// in the error list).
    pub fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&Token::Semicolon) && min_precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// The token under the cursor, if any.
    #[must_use]
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(token, _)| token)
    }

    /// The token one position ahead of the cursor, if any.
    #[must_use]
    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1).map(|(token, _)| token)
    }

    /// The source line of the token under the cursor.
    ///
    /// Falls back to the line of the last token once the cursor has moved
    /// past the end of input.
    #[must_use]
    pub fn current_line(&self) -> usize {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    /// Moves the cursor one token forward.
    pub const fn advance(&mut self) {
        self.position += 1;
    }

    /// Tests whether the peek token equals `token`.
    #[must_use]
    pub fn peek_is(&self, token: &Token) -> bool {
        self.peek_token() == Some(token)
    }

    /// The binding strength of the peek token.
    ///
    /// End of input reports [`Precedence::Lowest`], which stops the
    /// expression loop.
    #[must_use]
    pub fn peek_precedence(&self) -> Precedence {
        self.peek_token().map_or(Precedence::Lowest, token_precedence)
    }

    /// The binding strength of the current token.
    #[must_use]
    pub fn current_precedence(&self) -> Precedence {
        self.current_token().map_or(Precedence::Lowest, token_precedence)
    }

    /// Advances past the peek token when it equals `expected`.
    ///
    /// Otherwise records an [`ParseError::ExpectedToken`] (or an
    /// end-of-input error) and leaves the cursor untouched, so parsing can
    /// continue from the current position.
    ///
    /// # Returns
    /// `true` when the expected token was consumed.
    pub fn expect_peek(&mut self, expected: &Token) -> bool {
        if self.peek_is(expected) {
            self.advance();
            return true;
        }

        match self.peek_token() {
            Some(found) => {
                let error = ParseError::ExpectedToken { expected: format!("{expected:?}"),
                                                        found:    format!("{found:?}"),
                                                        line:     self.current_line(), };
                self.errors.push(error);
            },
            None => {
                self.errors
                    .push(ParseError::UnexpectedEndOfInput { line: self.current_line() });
            },
        }
        false
    }

    /// Records a "no prefix parse function" error for the current token.
    pub(in crate::interpreter::parser) fn no_prefix_rule_error(&mut self) {
        let error = match self.current_token() {
            Some(token) => ParseError::NoPrefixRule { token: format!("{token:?}"),
                                                      line:  self.current_line(), },
            None => ParseError::UnexpectedEndOfInput { line: self.current_line() },
        };
        self.errors.push(error);
    }

    /// Records an expectation failure against the peek token.
    pub(in crate::interpreter::parser) fn expected_peek_error(&mut self, expected: &str) {
        let error = match self.peek_token() {
            Some(found) => ParseError::ExpectedToken { expected: expected.to_string(),
                                                       found:    format!("{found:?}"),
                                                       line:     self.current_line(), },
            None => ParseError::UnexpectedEndOfInput { line: self.current_line() },
        };
        self.errors.push(error);
    }

    /// Records an expectation failure against the current token.
    pub(in crate::interpreter::parser) fn expected_current_error(&mut self, expected: &str) {
        let error = match self.current_token() {
            Some(found) => ParseError::ExpectedToken { expected: expected.to_string(),
                                                       found:    format!("{found:?}"),
                                                       line:     self.current_line(), },
            None => ParseError::UnexpectedEndOfInput { line: self.current_line() },
        };
        self.errors.push(error);
    }
}
