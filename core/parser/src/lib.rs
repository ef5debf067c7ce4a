//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert arithmetic strings into evaluatable expression trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power, right associative)
//! - Unary negation: -5, -2^2 (= -4)
//! - Implicit multiplication: 2x, 2(3+1), (1+2)(3+4)
//! - Constants: pi, e
//! - Functions: sqrt, sin, cos, tan, abs, round
//! - Parentheses for grouping
//! - Grapher definitions: f(x) = x^2

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{
    BinaryOperator, BuiltinFunction, Constant, DefinitionHeader, Expression, FunctionDefinition,
    UnaryOperator,
};
pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, parse_definition, Parser};
pub use token::{render_tokens, Operator, Spanned, Token};
