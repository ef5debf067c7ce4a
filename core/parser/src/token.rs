//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Arithmetic operator symbols.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
}

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Literals
    Number(f64),
    Identifier(String),

    // Operators
    Operator(Operator),

    // Delimiters
    LParen,
    RParen,
    Comma,
    /// Only meaningful inside a definition header: f(x) = ...
    Equals,
}

/// A token together with the character offset where it starts.
#[derive(Debug, PartialEq, Clone)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

impl Spanned {
    pub fn new(token: Token, position: usize) -> Self {
        Spanned { token, position }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Plus => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
            Operator::Star => write!(f, "*"),
            Operator::Slash => write!(f, "/"),
            Operator::Caret => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // f64's Display never uses exponent notation, so the lexer can read it back.
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Equals => write!(f, "="),
        }
    }
}

/// Re-serializes a token sequence into a normalized expression string.
/// Tokens are separated by a single space so adjacent identifiers and
/// numbers stay distinct when the string is tokenized again.
pub fn render_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
