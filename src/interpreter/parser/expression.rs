use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

/// Maps an operator token to its infix operator, if it has one.
const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Asterisk => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::LessEqual => Some(InfixOperator::LessEqual),
        Token::GreaterEqual => Some(InfixOperator::GreaterEqual),
        Token::Equal => Some(InfixOperator::Equal),
        Token::NotEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl Parser {
    /// Applies the prefix parse rule for the current token.
    ///
    /// Prefix rules exist for identifiers, integer, string and boolean
    /// literals, the unary operators `!` and `-`, grouping parentheses,
    /// `if`, `fn`, array literals, and hash literals. Any other token
    /// records a "no prefix parse function" error.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expr> {
        let Some(token) = self.current_token() else {
            self.no_prefix_rule_error();
            return None;
        };

        match token {
            Token::Identifier(name) => Some(Expr::Identifier { name: name.clone() }),
            Token::Int(value) => Some(Expr::IntegerLiteral { value: *value }),
            Token::Str(value) => Some(Expr::StringLiteral { value: value.clone() }),
            Token::True => Some(Expr::BooleanLiteral { value: true }),
            Token::False => Some(Expr::BooleanLiteral { value: false }),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            _ => {
                self.no_prefix_rule_error();
                None
            },
        }
    }

    /// Applies the infix parse rule for the current token.
    ///
    /// Called by the expression loop after it has consumed an operator-like
    /// token; `left` is the expression accumulated so far.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let Some(token) = self.current_token() else {
            self.expected_current_error("an infix operator");
            return None;
        };

        match token {
            Token::LParen => self.parse_call_expression(left),
            Token::LBracket => self.parse_index_expression(left),
            token => {
                let Some(op) = infix_operator(token) else {
                    self.expected_current_error("an infix operator");
                    return None;
                };
                self.parse_infix_operator(left, op)
            },
        }
    }

    /// Parses a unary operator application: `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` groups
    /// as `(-a) * b`.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> Option<Expr> {
        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { op,
                            operand: Box::new(operand) })
    }

    /// Parses the right-hand side of a binary operator application.
    ///
    /// Recurses into the expression loop at the operator's own precedence,
    /// which gives left-associativity for operators of equal strength.
    fn parse_infix_operator(&mut self, left: Expr, op: InfixOperator) -> Option<Expr> {
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix { left: Box::new(left),
                           op,
                           right: Box::new(right) })
    }

    /// Parses a parenthesized expression: `( <expression> )`.
    ///
    /// Grouping restarts the expression loop at the lowest level, so the
    /// parenthesized subtree binds as one unit regardless of the operators
    /// around it.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax: `if ( <condition> ) <block>` optionally followed by
    /// `else <block>`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) || !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(&Token::Else) {
            self.advance();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses a function literal: `fn ( <params> ) <block>`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        let params = self.parse_function_params()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::FunctionLiteral { params, body })
    }

    /// Parses a comma-separated parameter-name list up to `)`.
    fn parse_function_params(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.advance();
            return Some(params);
        }

        self.advance();
        params.push(self.current_identifier()?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            self.advance();
            params.push(self.current_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        Some(params)
    }

    /// Parses a call expression; `left` is the callee.
    ///
    /// The current token is the `(` that triggered the infix rule.
    fn parse_call_expression(&mut self, left: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(&Token::RParen)?;
        Some(Expr::Call { callee: Box::new(left),
                          args })
    }

    /// Parses an index expression; `left` is the indexed collection.
    ///
    /// The current token is the `[` that triggered the infix rule.
    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&Token::RBracket) {
            return None;
        }
        Some(Expr::Index { collection: Box::new(left),
                           index:      Box::new(index), })
    }

    /// Parses an array literal: `[ <elements> ]`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expr::ArrayLiteral { elements })
    }

    /// Parses a hash literal: `{ <key> : <value>, ... }`.
    ///
    /// Keys and values are full expressions; whether a key is actually
    /// hashable is checked at evaluation time, not here.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }
        Some(Expr::HashLiteral { pairs })
    }

    /// Parses a comma-separated expression list until a closing token.
    ///
    /// This helper is shared by call arguments and array literals. An
    /// immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := expression ("," expression)*`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (e.g., `]` or `)`).
    fn parse_expression_list(&mut self, closing: &Token) -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }
        Some(items)
    }

    /// Returns the current token's identifier name, or records an error.
    fn current_identifier(&mut self) -> Option<String> {
        if let Some(Token::Identifier(name)) = self.current_token() {
            return Some(name.clone());
        }
        self.expected_current_error("an identifier");
        None
    }
}
