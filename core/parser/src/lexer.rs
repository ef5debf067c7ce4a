//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It handles
//! whitespace skipping, number parsing, identifiers and the single-character
//! operators. Implicit multiplication is not decided here; the parser
//! looks at token adjacency for that.
//!
//! SUPPORTED OPERATORS:
//! - Single char: + - * / ^ ( ) , =
//! - Alternate spellings: ** (power), × (multiply), ÷ (divide)

use crate::error::{ParseError, ParseResult};
use crate::token::{Operator, Spanned, Token};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    /// Character offset of the next unread character.
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            position: 0,
        }
    }

    /// Advances the lexer and returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> ParseResult<Option<Spanned>> {
        self.skip_whitespace();

        let start = self.position;
        let token = match self.bump() {
            Some('+') => Token::Operator(Operator::Plus),
            Some('-') => Token::Operator(Operator::Minus),
            Some('*') => self.read_star(),
            Some('×') => Token::Operator(Operator::Star),
            Some('/') | Some('÷') => Token::Operator(Operator::Slash),
            Some('^') => Token::Operator(Operator::Caret),
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(',') => Token::Comma,
            Some('=') => Token::Equals,

            // Numbers start with a digit or a dot
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch, start)?,

            Some(ch) if ch.is_alphabetic() => self.read_identifier(ch),

            None => return Ok(None),

            Some(ch) => {
                return Err(ParseError::UnexpectedCharacter {
                    character: ch,
                    position: start,
                })
            }
        };

        Ok(Some(Spanned::new(token, start)))
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Handles '*' and the '**' power spelling.
    fn read_star(&mut self) -> Token {
        if self.input.peek() == Some(&'*') {
            self.bump();
            Token::Operator(Operator::Caret)
        } else {
            Token::Operator(Operator::Star)
        }
    }

    fn read_number(&mut self, first_char: char, start: usize) -> ParseResult<Token> {
        let mut number_str = String::from(first_char);
        let mut has_dot = first_char == '.';
        let mut malformed = false;

        // A second dot is swallowed so the error can report the whole numeral.
        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
            } else if ch == '.' {
                malformed |= has_dot;
                has_dot = true;
                number_str.push(ch);
            } else {
                break;
            }
            self.bump();
        }

        if malformed {
            return Err(ParseError::MalformedNumber {
                text: number_str,
                position: start,
            });
        }

        match number_str.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Token::Number(n)),
            // Long digit strings overflow to infinity instead of failing
            Ok(_) => Err(ParseError::NumberOutOfRange {
                text: number_str,
                position: start,
            }),
            Err(_) => Err(ParseError::MalformedNumber {
                text: number_str,
                position: start,
            }),
        }
    }

    fn read_identifier(&mut self, first_char: char) -> Token {
        let mut ident = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if !ch.is_alphabetic() {
                break;
            }
            ident.push(ch);
            self.bump();
        }

        // Case is preserved; the parser matches names case-sensitively.
        Token::Identifier(ident)
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Tokenizes the whole input, stopping at the first lexical error.
pub fn tokenize(input: &str) -> ParseResult<Vec<Spanned>> {
    let tokens = Lexer::new(input).collect::<ParseResult<Vec<_>>>()?;
    log::trace!(target: "parser", "tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}
