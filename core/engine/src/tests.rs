//! FILENAME: core/engine/src/tests.rs
//! PURPOSE: End-to-end tests of the calculator and grapher entry points.

use proptest::prelude::*;

use crate::{evaluate, evaluate_with, sample, EvalContext, EvalError};

// ========================================
// PRECEDENCE
// ========================================

#[test]
fn multiplication_before_addition() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("10-2*3"), Ok(4.0));
}

#[test]
fn parentheses_first() {
    assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluate("((2+3)*2)^2"), Ok(100.0));
    assert_eq!(evaluate("(1+2)*(3+4)"), Ok(21.0));
}

#[test]
fn exponent_before_addition() {
    assert_eq!(evaluate("2^3+1"), Ok(9.0));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
    assert_eq!(evaluate("2^2^3"), Ok(256.0));
}

#[test]
fn same_precedence_is_left_to_right() {
    assert_eq!(evaluate("10/2/5"), Ok(1.0));
    assert_eq!(evaluate("2+3*4-5/5"), Ok(13.0));
}

#[test]
fn unary_minus_is_applied_after_power() {
    assert_eq!(evaluate("-2^2"), Ok(-4.0));
    assert_eq!(evaluate("(-2)^2"), Ok(4.0));
    assert_eq!(evaluate("2^-1"), Ok(0.5));
    assert_eq!(evaluate("--3"), Ok(3.0));
}

// ========================================
// IMPLICIT MULTIPLICATION AND NAMES
// ========================================

#[test]
fn implicit_multiplication() {
    let ctx = EvalContext::new().with_variable("x", 5.0);
    assert_eq!(evaluate_with("2x", &ctx), Ok(10.0));
    assert_eq!(evaluate_with("x(x+1)", &ctx), Ok(30.0));
    assert_eq!(evaluate("2(3+1)"), Ok(8.0));
    assert_eq!(evaluate("(1+2)(3+4)"), Ok(21.0));
}

#[test]
fn constants() {
    assert_eq!(evaluate("2pi"), Ok(2.0 * std::f64::consts::PI));
    assert_eq!(evaluate("e"), Ok(std::f64::consts::E));
}

#[test]
fn alternate_operator_spellings() {
    assert_eq!(evaluate("2**3"), Ok(8.0));
    assert_eq!(evaluate("6÷2×3"), Ok(9.0));
}

// ========================================
// FUNCTIONS AND ERRORS
// ========================================

#[test]
fn function_evaluation() {
    assert_eq!(evaluate("sqrt(16)+2"), Ok(6.0));
    assert_eq!(evaluate("abs(-3)"), Ok(3.0));
    assert_eq!(evaluate("sin(0)+cos(0)"), Ok(1.0));
}

#[test]
fn sqrt_of_negative_is_domain_error() {
    assert!(matches!(evaluate("sqrt(-1)"), Err(EvalError::Domain { .. })));
}

#[test]
fn division_by_zero_is_domain_error() {
    assert!(matches!(evaluate("1/0"), Err(EvalError::Domain { .. })));
    assert!(matches!(evaluate("1/(2-2)"), Err(EvalError::Domain { .. })));
}

#[test]
fn overflow_is_evaluation_error() {
    assert!(matches!(evaluate("10^400"), Err(EvalError::Evaluation { .. })));
}

#[test]
fn huge_literal_is_evaluation_error() {
    let huge = format!("1{}", "0".repeat(400));
    assert!(matches!(evaluate(&huge), Err(EvalError::Evaluation { .. })));
    assert!(matches!(
        sample(&format!("x + {}", huge), "x", 0.0, 1.0, 3),
        Err(EvalError::Evaluation { .. })
    ));
}

#[test]
fn overlong_expression_is_rejected_without_overflow() {
    let long_sum = vec!["1"; 20_000].join("+");
    assert!(matches!(evaluate(&long_sum), Err(EvalError::Syntax { .. })));

    let long_product = vec!["x"; 20_000].join(" ");
    assert!(matches!(
        sample(&long_product, "x", 0.0, 1.0, 3),
        Err(EvalError::Syntax { .. })
    ));

    assert_eq!(evaluate(&vec!["1"; 500].join("+")), Ok(500.0));
}

#[test]
fn unknown_symbol() {
    assert_eq!(
        evaluate("foo+1"),
        Err(EvalError::UnknownSymbol {
            name: "foo".to_string()
        })
    );
    // The calculator binds nothing, not even x
    assert!(matches!(evaluate("2x"), Err(EvalError::UnknownSymbol { .. })));
}

#[test]
fn unbalanced_parentheses() {
    assert!(matches!(evaluate("((2+3)*4"), Err(EvalError::Syntax { .. })));
}

#[test]
fn arity_error() {
    assert_eq!(
        evaluate("sqrt(1,2)"),
        Err(EvalError::Arity {
            function: "sqrt".to_string(),
            expected: 1,
            found: 2,
        })
    );
}

#[test]
fn lex_error_carries_position() {
    assert!(matches!(
        evaluate("1 + 2 # 3"),
        Err(EvalError::Lex { position: 6, .. })
    ));
}

#[test]
fn definition_header_is_only_for_the_grapher() {
    assert!(matches!(evaluate("f(x)=x"), Err(EvalError::Syntax { .. })));
}

#[test]
fn errors_serialize_with_kind_tag() {
    let err = evaluate("sqrt(-1)").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "domain");
    assert_eq!(json["kind"], err.kind());
}

// ========================================
// SAMPLER
// ========================================

#[test]
fn sampler_skips_domain_errors() {
    let sampled = sample("sqrt(x)", "x", -5.0, 5.0, 11).unwrap();
    assert!(sampled.skipped > 0);
    assert!(sampled.points.iter().all(|(x, _)| *x >= 0.0));
    assert_eq!(sampled.points.len() + sampled.skipped, 11);
}

#[test]
fn sampler_aborts_on_syntax_error() {
    assert!(matches!(
        sample("2+", "x", 0.0, 1.0, 5),
        Err(EvalError::Syntax { .. })
    ));
}

#[test]
fn sampler_accepts_definition_header() {
    let sampled = sample("f(x)=x^2", "x", -5.0, 5.0, 11).unwrap();
    assert_eq!(sampled.points.len(), 11);
    assert_eq!(sampled.points[0], (-5.0, 25.0));
}

#[test]
fn sampler_skips_tan_poles() {
    // pi/2 lies exactly on the grid: -pi/2 + 2 * (pi/2)
    let half_pi = std::f64::consts::FRAC_PI_2;
    let sampled = sample("tan(x)", "x", -half_pi, 3.0 * half_pi, 5).unwrap();
    assert!(sampled.skipped >= 1);
}

#[test]
fn sampled_points_serialize_as_pairs() {
    let sampled = sample("2x", "x", 0.0, 1.0, 2).unwrap();
    let json = serde_json::to_string(&sampled).unwrap();
    assert_eq!(json, r#"{"points":[[0.0,0.0],[1.0,2.0]],"skipped":0}"#);
}

// ========================================
// PROPERTIES
// ========================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        x in -100f64..100.0,
    ) {
        let expr = format!("{} * x^2 - sin({}x) / (1 + abs(x))", a.abs(), b.abs());
        let ctx = EvalContext::new().with_variable("x", x);
        let first = evaluate_with(&expr, &ctx);
        let second = evaluate_with(&expr, &ctx);
        prop_assert_eq!(first.map(f64::to_bits), second.map(f64::to_bits));
    }

    #[test]
    fn sample_count_bounds_output(count in 1usize..200) {
        let sampled = sample("sqrt(x)", "x", -1.0, 1.0, count).unwrap();
        prop_assert_eq!(sampled.points.len() + sampled.skipped, count);
    }
}
