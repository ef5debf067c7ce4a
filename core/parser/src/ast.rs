//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser converts
//! those tokens into this tree structure. The engine's Evaluator then
//! traverses this tree to compute the final number.
//!
//! SUPPORTED EXPRESSIONS:
//! - Number literals: 2, 3.5, .25
//! - Named constants: pi (or π), e
//! - Free variables: x (bound by the caller at evaluation time)
//! - Binary operations: +, -, *, /, ^
//! - Unary operations: - (negation), + (identity)
//! - Function calls: sqrt(x), sin(x), cos(x), tan(x), abs(x), round(x)

use std::collections::BTreeSet;

/// Represents a parsed expression.
/// This is the core data structure that the evaluator will traverse.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// A numeric literal.
    Number(f64),

    /// A named constant resolved at parse time.
    Constant(Constant),

    /// An identifier that is neither a constant nor a function.
    /// Its value comes from the evaluation context.
    Variable(String),

    /// A binary operation: left op right (e.g., 5 + 3, 2 ^ x).
    /// Implicit multiplication (2x) is represented as Multiply.
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    /// A unary operation: op operand (e.g., -5).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// A call to one of the built-in unary functions.
    FunctionCall {
        function: BuiltinFunction,
        argument: Box<Expression>,
    },
}

/// Binary operators for expressions, lowest precedence group first.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^ (highest precedence, right associative)
}

/// Unary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Negate, // -
    Plus,   // +
}

/// The closed set of named constants.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// Looks up a constant by its (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Constant> {
        match name {
            "pi" | "π" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

/// The closed registry of built-in functions. Every function takes
/// exactly one argument.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BuiltinFunction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Abs,
    Round,
}

impl BuiltinFunction {
    pub const ARITY: usize = 1;

    /// Looks up a function by its (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<BuiltinFunction> {
        match name {
            "sqrt" => Some(BuiltinFunction::Sqrt),
            "sin" => Some(BuiltinFunction::Sin),
            "cos" => Some(BuiltinFunction::Cos),
            "tan" => Some(BuiltinFunction::Tan),
            "abs" => Some(BuiltinFunction::Abs),
            "round" => Some(BuiltinFunction::Round),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinFunction::Sqrt => "sqrt",
            BuiltinFunction::Sin => "sin",
            BuiltinFunction::Cos => "cos",
            BuiltinFunction::Tan => "tan",
            BuiltinFunction::Abs => "abs",
            BuiltinFunction::Round => "round",
        }
    }
}

/// A grapher definition such as `f(x) = x^2`, or a bare body like `x^2`.
#[derive(Debug, PartialEq, Clone)]
pub struct FunctionDefinition {
    pub header: Option<DefinitionHeader>,
    pub body: Expression,
}

/// The `f(x) =` part of a definition.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DefinitionHeader {
    pub name: String,
    pub parameter: String,
}

impl Expression {
    /// Returns the free variables referenced anywhere in the expression,
    /// in sorted order without duplicates.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Expression::Number(_) | Expression::Constant(_) => {}
            Expression::Variable(name) => {
                names.insert(name.as_str());
            }
            Expression::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
            Expression::UnaryOp { operand, .. } => operand.collect_variables(names),
            Expression::FunctionCall { argument, .. } => argument.collect_variables(names),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Power => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Plus => write!(f, "+"),
        }
    }
}

/// Fully parenthesized rendering, useful for checking how a string was grouped.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Constant(c) => write!(f, "{}", c.name()),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::BinaryOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expression::UnaryOp { op, operand } => write!(f, "({}{})", op, operand),
            Expression::FunctionCall { function, argument } => {
                write!(f, "{}({})", function.name(), argument)
            }
        }
    }
}
