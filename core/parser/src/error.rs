//! FILENAME: core/parser/src/error.rs

use thiserror::Error;

/// Errors raised while turning an expression string into an AST.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },

    #[error("number '{text}' at position {position} is too large")]
    NumberOutOfRange { text: String, position: usize },

    #[error("{message}")]
    Syntax {
        message: String,
        position: Option<usize>,
    },

    #[error("function '{function}' expects {expected} argument(s), found {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    pub fn syntax(message: impl Into<String>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            position: None,
        }
    }

    pub fn syntax_at(message: impl Into<String>, position: usize) -> Self {
        ParseError::Syntax {
            message: message.into(),
            position: Some(position),
        }
    }

    /// True for input the lexer could not split into tokens. A numeral that
    /// overflows is well-formed, so it is not lexical.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedCharacter { .. } | ParseError::MalformedNumber { .. }
        )
    }

    /// Character offset of the offending input, when known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter { position, .. }
            | ParseError::MalformedNumber { position, .. }
            | ParseError::NumberOutOfRange { position, .. } => Some(*position),
            ParseError::Syntax { position, .. } => *position,
            ParseError::Arity { .. } => None,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
