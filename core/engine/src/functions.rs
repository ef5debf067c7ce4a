//! FILENAME: core/engine/src/functions.rs
//! PURPOSE: Numeric implementations of the built-in unary functions.

use crate::error::{EvalError, EvalResult};
use parser::BuiltinFunction;

/// Applies a built-in function to an already evaluated argument.
/// Trigonometric functions take radians.
pub fn apply(function: BuiltinFunction, arg: f64) -> EvalResult<f64> {
    match function {
        BuiltinFunction::Sqrt => fn_sqrt(arg),
        BuiltinFunction::Sin => Ok(arg.sin()),
        BuiltinFunction::Cos => Ok(arg.cos()),
        BuiltinFunction::Tan => fn_tan(arg),
        BuiltinFunction::Abs => Ok(arg.abs()),
        // Ties go to the even neighbour: round(2.5) = 2
        BuiltinFunction::Round => Ok(arg.round_ties_even()),
    }
}

fn fn_sqrt(arg: f64) -> EvalResult<f64> {
    if arg < 0.0 {
        return Err(EvalError::domain(format!(
            "Square root of a negative number: {}",
            arg
        )));
    }
    Ok(arg.sqrt())
}

fn fn_tan(arg: f64) -> EvalResult<f64> {
    // cos(pi/2) in f64 is ~6e-17, not 0
    if arg.cos().abs() <= f64::EPSILON {
        return Err(EvalError::domain(format!("tan is undefined at {}", arg)));
    }
    Ok(arg.tan())
}
