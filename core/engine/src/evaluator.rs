//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates AST expressions to a number.
//! CONTEXT: After an expression is parsed into an AST, this module traverses
//! the tree and computes the final result. Evaluation is a pure function of
//! the tree and the variable scope: no state is kept between calls.
//!
//! SUPPORTED FEATURES:
//! - Number literals and the constants pi and e
//! - Variable lookup through a VariableScope
//! - Binary operations: +, -, *, /, ^
//! - Unary operations: - (negation), + (identity)
//! - Functions: SQRT, SIN, COS, TAN, ABS, ROUND
//!
//! NUMERIC RULES:
//! - Division by zero is a Domain error, never infinity.
//! - A power that is NaN (negative base, fractional exponent) or that
//!   divides by zero (0^-1) is a Domain error.
//! - Any other non-finite result is an Evaluation error (overflow).

use crate::context::VariableScope;
use crate::error::{EvalError, EvalResult};
use crate::functions;
use parser::{BinaryOperator, Expression, UnaryOperator};

/// The Evaluator walks an expression tree against a variable scope.
pub struct Evaluator<'a, S: VariableScope + ?Sized> {
    scope: &'a S,
}

impl<'a, S: VariableScope + ?Sized> Evaluator<'a, S> {
    pub fn new(scope: &'a S) -> Self {
        Evaluator { scope }
    }

    /// Evaluates an AST expression and returns the result.
    pub fn evaluate(&self, expr: &Expression) -> EvalResult<f64> {
        match expr {
            // Trees built by hand can hold literals the lexer would reject
            Expression::Number(n) => finite(*n),
            Expression::Constant(constant) => Ok(constant.value()),
            Expression::Variable(name) => self.eval_variable(name),
            Expression::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                apply_binary(*op, left_val, right_val)
            }
            Expression::UnaryOp { op, operand } => {
                let value = self.evaluate(operand)?;
                Ok(match op {
                    UnaryOperator::Negate => -value,
                    UnaryOperator::Plus => value,
                })
            }
            Expression::FunctionCall { function, argument } => {
                let value = self.evaluate(argument)?;
                functions::apply(*function, value).and_then(finite)
            }
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.scope
            .lookup(name)
            .ok_or_else(|| EvalError::UnknownSymbol {
                name: name.to_string(),
            })
    }
}

/// Applies a binary operator to two evaluated operands.
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => finite(left + right),
        BinaryOperator::Subtract => finite(left - right),
        BinaryOperator::Multiply => finite(left * right),
        BinaryOperator::Divide => eval_divide(left, right),
        BinaryOperator::Power => eval_power(left, right),
    }
}

fn eval_divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::domain("Cannot divide by zero"));
    }
    finite(left / right)
}

fn eval_power(base: f64, exponent: f64) -> EvalResult<f64> {
    let result = base.powf(exponent);

    if result.is_nan() {
        return Err(EvalError::domain(format!(
            "{} cannot be raised to the power {}",
            base, exponent
        )));
    }
    if result.is_infinite() && base == 0.0 {
        return Err(EvalError::domain("Cannot divide by zero"));
    }

    finite(result)
}

/// Rejects infinities and NaN produced from finite operands.
fn finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::evaluation("Result is undefined (infinity or NaN)"))
    }
}
