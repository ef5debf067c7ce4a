//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator and grapher engine.
//! CONTEXT: Re-exports public types and the two entry points used by front
//! ends: `evaluate` for the calculator and `sample` for the grapher.

pub mod calculator;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod functions;
pub mod plot;
pub mod sampler;

#[cfg(test)]
mod tests;

// Re-export commonly used types at the crate root
pub use calculator::Calculator;
pub use context::{Binding, EvalContext, VariableScope};
pub use error::{EvalError, EvalResult};
pub use evaluator::{apply_binary, Evaluator};
pub use format::format_result;
pub use plot::{PlotError, PlotFunction, PlotList, PLOT_COLORS, PLOT_VARIABLE};
pub use sampler::{sample, PlotRange, Sample, SampleIter, Sampled, Sampler};

pub use parser::{BinaryOperator, BuiltinFunction, Constant, Expression, UnaryOperator};

/// Calculator entry point: evaluates `expression` with no variables bound.
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with(expression, &EvalContext::new())
}

/// Evaluates `expression` against the given variable scope.
pub fn evaluate_with<S: VariableScope + ?Sized>(expression: &str, scope: &S) -> EvalResult<f64> {
    let expr = parser::parse(expression)?;
    Evaluator::new(scope).evaluate(&expr)
}
