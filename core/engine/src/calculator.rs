//! FILENAME: core/engine/src/calculator.rs
//! PURPOSE: Calculator session state on top of the stateless evaluator.
//! CONTEXT: Remembers the last successful result and offers the
//! two-operand operations behind the calculator's operator buttons.

use crate::error::EvalResult;
use crate::evaluator::apply_binary;
use parser::BinaryOperator;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    last_result: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Evaluates a full expression. The last result only changes on success.
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        let result = crate::evaluate(expression)?;
        self.last_result = result;
        Ok(result)
    }

    /// Applies one operator to two operands, e.g. `calculate(15.0, Divide, 3.0)`.
    pub fn calculate(&mut self, a: f64, op: BinaryOperator, b: f64) -> EvalResult<f64> {
        let result = apply_binary(op, a, b)?;
        self.last_result = result;
        Ok(result)
    }

    pub fn clear(&mut self) {
        self.last_result = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut calc = Calculator::new();
        assert_eq!(calc.calculate(5.0, BinaryOperator::Add, 3.0), Ok(8.0));
        assert_eq!(calc.calculate(10.0, BinaryOperator::Subtract, 4.0), Ok(6.0));
        assert_eq!(calc.calculate(6.0, BinaryOperator::Multiply, 7.0), Ok(42.0));
        assert_eq!(calc.calculate(15.0, BinaryOperator::Divide, 3.0), Ok(5.0));
        assert_eq!(calc.last_result(), 5.0);
    }

    #[test]
    fn failure_keeps_last_result() {
        let mut calc = Calculator::new();
        calc.evaluate("2+3*4").unwrap();
        assert!(calc.calculate(1.0, BinaryOperator::Divide, 0.0).is_err());
        assert!(calc.evaluate("2+").is_err());
        assert_eq!(calc.last_result(), 14.0);
    }

    #[test]
    fn clear_resets() {
        let mut calc = Calculator::new();
        calc.evaluate("7").unwrap();
        calc.clear();
        assert_eq!(calc.last_result(), 0.0);
    }
}
