//! FILENAME: core/engine/src/error.rs
//! PURPOSE: The public error type returned by evaluation and sampling.
//! CONTEXT: Every failure is one of six classes. The sampler relies on the
//! class to decide between skipping a point (Domain) and aborting the sweep.

use parser::ParseError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EvalError {
    #[error("{message}")]
    Lex { message: String, position: usize },

    #[error("{message}")]
    Syntax {
        message: String,
        position: Option<usize>,
    },

    #[error("Unknown symbol: {name}")]
    UnknownSymbol { name: String },

    #[error("Function '{function}' expects {expected} argument(s), found {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    /// Mathematically undefined for the given inputs.
    #[error("{message}")]
    Domain { message: String },

    /// Catch-all numeric failure such as overflow.
    #[error("{message}")]
    Evaluation { message: String },
}

impl EvalError {
    pub fn domain(message: impl Into<String>) -> Self {
        EvalError::Domain {
            message: message.into(),
        }
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        EvalError::Evaluation {
            message: message.into(),
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, EvalError::Domain { .. })
    }

    /// Short class name, as used in the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::Lex { .. } => "lex",
            EvalError::Syntax { .. } => "syntax",
            EvalError::UnknownSymbol { .. } => "unknownSymbol",
            EvalError::Arity { .. } => "arity",
            EvalError::Domain { .. } => "domain",
            EvalError::Evaluation { .. } => "evaluation",
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedCharacter { .. } | ParseError::MalformedNumber { .. } => {
                EvalError::Lex {
                    message: err.to_string(),
                    position: err.position().unwrap_or_default(),
                }
            }
            // A literal that overflows f64 is an overflow, not bad input
            ParseError::NumberOutOfRange { .. } => EvalError::evaluation(err.to_string()),
            ParseError::Syntax { message, position } => EvalError::Syntax { message, position },
            ParseError::Arity {
                function,
                expected,
                found,
            } => EvalError::Arity {
                function,
                expected,
                found,
            },
        }
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
