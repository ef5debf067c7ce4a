//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a sequence of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes tokens
//! from the Lexer and builds an Expression tree that the engine evaluates.
//!
//! GRAMMAR:
//!   definition --> [IDENTIFIER "(" IDENTIFIER ")" "="] sum
//!   sum        --> term ( ("+" | "-") term )*
//!   term       --> product ( ("*" | "/") product )*
//!   product    --> unary ( power )*          // implicit multiplication: 2x, 2(3+1)
//!   unary      --> ("-" | "+") unary | power
//!   power      --> primary ( "^" unary )?    // right associative, so -2^2 is -(2^2)
//!   primary    --> NUMBER | constant | variable | function_call | "(" sum ")"
//!   function_call --> FUNCTION "(" sum ")"
//!
//! An identifier followed by "(" is a function call only when it names a
//! built-in function; otherwise the parenthesized group is implicitly
//! multiplied (x(x+1) is x*(x+1)).

use crate::ast::{
    BinaryOperator, BuiltinFunction, Constant, DefinitionHeader, Expression, FunctionDefinition,
    UnaryOperator,
};
use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize;
use crate::token::{Operator, Spanned, Token};

/// Deepest nesting accepted before giving up with a syntax error.
const MAX_DEPTH: usize = 256;

/// Most operator and call nodes one expression may build. Flat chains like
/// 1+1+...+1 nest through the loops rather than through `parse_unary`, so
/// they are bounded here; evaluating and dropping the tree both recurse.
const MAX_NODES: usize = 1024;

/// The Parser holds the token sequence and the index of the current token.
pub struct Parser {
    tokens: Vec<Spanned>,
    index: usize,
    depth: usize,
    nodes: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Parser {
            tokens,
            index: 0,
            depth: 0,
            nodes: 0,
        }
    }

    /// Parses the entire sequence as a plain expression.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.tokens.is_empty() {
            return Err(ParseError::syntax("Empty expression"));
        }

        let expr = self.parse_sum()?;
        self.expect_end()?;
        Ok(expr)
    }

    /// Parses the sequence as a grapher definition with an optional
    /// `f(x) =` header in front of the body.
    pub fn parse_definition(&mut self) -> ParseResult<FunctionDefinition> {
        let header = self.parse_header();
        let body = self.parse()?;
        Ok(FunctionDefinition { header, body })
    }

    /// Consumes `name ( parameter ) =` when the sequence starts with it.
    fn parse_header(&mut self) -> Option<DefinitionHeader> {
        let header = match self.tokens.as_slice() {
            [
                Spanned { token: Token::Identifier(name), .. },
                Spanned { token: Token::LParen, .. },
                Spanned { token: Token::Identifier(parameter), .. },
                Spanned { token: Token::RParen, .. },
                Spanned { token: Token::Equals, .. },
                ..,
            ] => DefinitionHeader {
                name: name.clone(),
                parameter: parameter.clone(),
            },
            _ => return None,
        };

        self.tokens.drain(..5);
        Some(header)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|t| &t.token)
    }

    fn current_position(&self) -> Option<usize> {
        self.tokens.get(self.index).map(|t| t.position)
    }

    fn previous(&self) -> Option<&Token> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| &t.token)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.index += 1;
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        match self.current() {
            Some(token) if *token == expected => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(ParseError::syntax_at(
                format!("Expected '{}', found '{}'", expected, token),
                self.current_position().unwrap_or_default(),
            )),
            None => Err(ParseError::syntax(format!(
                "Expected '{}' before end of expression",
                expected
            ))),
        }
    }

    fn expect_end(&self) -> ParseResult<()> {
        match (self.current(), self.current_position()) {
            (Some(token), Some(position)) => Err(ParseError::syntax_at(
                format!("Unexpected '{}' after expression", token),
                position,
            )),
            _ => Ok(()),
        }
    }

    /// Counts one more operator or call node against MAX_NODES.
    fn charge_node(&mut self) -> ParseResult<()> {
        self.nodes += 1;
        if self.nodes > MAX_NODES {
            return Err(ParseError::syntax_at(
                "Expression is too long",
                self.current_position().unwrap_or_default(),
            ));
        }
        Ok(())
    }

    /// Parses additive expressions (+ and -).
    fn parse_sum(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.current() {
                Some(Token::Operator(Operator::Plus)) => BinaryOperator::Add,
                Some(Token::Operator(Operator::Minus)) => BinaryOperator::Subtract,
                _ => break,
            };

            self.charge_node()?;
            self.advance();
            let right = self.parse_term()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_term(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_product()?;

        loop {
            let op = match self.current() {
                Some(Token::Operator(Operator::Star)) => BinaryOperator::Multiply,
                Some(Token::Operator(Operator::Slash)) => BinaryOperator::Divide,
                _ => break,
            };

            self.charge_node()?;
            self.advance();
            let right = self.parse_product()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses implicit multiplication: a factor directly followed by another.
    fn parse_product(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;

        while self.starts_implicit_factor() {
            self.charge_node()?;
            let right = self.parse_power()?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::Multiply,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// An identifier or "(" always continues a product. A number only does
    /// after ")", so "(1+2)3" is accepted and "2 3" stays an error.
    fn starts_implicit_factor(&self) -> bool {
        match self.current() {
            Some(Token::Identifier(_)) | Some(Token::LParen) => true,
            Some(Token::Number(_)) => matches!(self.previous(), Some(Token::RParen)),
            _ => false,
        }
    }

    /// Parses unary expressions (negation and unary plus).
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::syntax_at(
                "Expression is nested too deeply",
                self.current_position().unwrap_or_default(),
            ));
        }

        let result = self.parse_unary_operand();
        self.depth -= 1;
        result
    }

    fn parse_unary_operand(&mut self) -> ParseResult<Expression> {
        let op = match self.current() {
            Some(Token::Operator(Operator::Minus)) => UnaryOperator::Negate,
            Some(Token::Operator(Operator::Plus)) => UnaryOperator::Plus,
            _ => return self.parse_power(),
        };

        self.charge_node()?;
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// Parses power/exponentiation expressions (^).
    /// The exponent is a unary, so 2^-1 works and 2^3^2 nests to the right.
    fn parse_power(&mut self) -> ParseResult<Expression> {
        let left = self.parse_primary()?;

        if self.current() == Some(&Token::Operator(Operator::Caret)) {
            self.charge_node()?;
            self.advance();
            let right = self.parse_unary()?;

            return Ok(Expression::BinaryOp {
                left: Box::new(left),
                op: BinaryOperator::Power,
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// Parses primary expressions (literals, names, function calls, parentheses).
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let position = self.current_position().unwrap_or_default();

        match self.current().cloned() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expression::Number(n))
            }

            Some(Token::Identifier(name)) => {
                self.advance();
                self.parse_identifier(name, position)
            }

            // Parenthesized expression
            Some(Token::LParen) => {
                self.advance();
                let expr = self.parse_sum()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }

            None => Err(ParseError::syntax("Unexpected end of expression")),

            Some(token) => Err(ParseError::syntax_at(
                format!("Unexpected '{}'", token),
                position,
            )),
        }
    }

    /// Resolves an identifier against the function registry and the
    /// constant table; anything else is a variable.
    fn parse_identifier(&mut self, name: String, position: usize) -> ParseResult<Expression> {
        if let Some(function) = BuiltinFunction::from_name(&name) {
            if self.current() != Some(&Token::LParen) {
                return Err(ParseError::syntax_at(
                    format!("Function '{}' must be followed by '('", name),
                    position,
                ));
            }
            return self.parse_function_call(function);
        }

        if let Some(constant) = Constant::from_name(&name) {
            return Ok(Expression::Constant(constant));
        }

        Ok(Expression::Variable(name))
    }

    /// Parses a function call like sqrt(16). Arguments are counted so a
    /// wrong number of them is reported as an arity error.
    fn parse_function_call(&mut self, function: BuiltinFunction) -> ParseResult<Expression> {
        self.charge_node()?;
        // Consume the '('
        self.advance();

        let mut args = Vec::new();

        if self.current() != Some(&Token::RParen) {
            args.push(self.parse_sum()?);

            while self.current() == Some(&Token::Comma) {
                self.advance();
                args.push(self.parse_sum()?);
            }
        }

        self.expect(Token::RParen)?;

        if args.len() != BuiltinFunction::ARITY {
            return Err(ParseError::Arity {
                function: function.name().to_string(),
                expected: BuiltinFunction::ARITY,
                found: args.len(),
            });
        }

        let argument = args.remove(0);
        Ok(Expression::FunctionCall {
            function,
            argument: Box::new(argument),
        })
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse()
}

/// Parses a grapher string such as "f(x) = x^2" or just "x^2".
pub fn parse_definition(input: &str) -> ParseResult<FunctionDefinition> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse_definition()
}
