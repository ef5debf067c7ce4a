//! FILENAME: tests/test_calc.rs
//! Integration tests for the calc and tokens commands.

mod common;

use app_lib::AppError;
use common::TestHarness;
use engine::EvalError;

#[test]
fn test_calc_formats_whole_numbers() {
    let harness = TestHarness::new();
    let output = harness.run(&["calc", "2+3*4"]).unwrap();
    assert_eq!(output.stdout, "14");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_calc_formats_fractions() {
    let harness = TestHarness::new();
    assert_eq!(harness.run(&["calc", "1/3"]).unwrap().stdout, "0.3333333333");
    assert_eq!(harness.run(&["calc", "-2^2"]).unwrap().stdout, "-4");
}

#[test]
fn test_calc_accepts_leading_minus_expression() {
    let harness = TestHarness::new();
    assert_eq!(harness.run(&["calc", "-5+2"]).unwrap().stdout, "-3");
    assert_eq!(harness.run(&["calc", "--", "-(2)"]).unwrap().stdout, "-2");
}

#[test]
fn test_calc_reports_domain_error() {
    let harness = TestHarness::new();
    let err = harness.run(&["calc", "sqrt(-1)"]).unwrap_err();
    assert!(matches!(err, AppError::Eval(EvalError::Domain { .. })));
}

#[test]
fn test_calc_reports_unknown_symbol() {
    let harness = TestHarness::new();
    let err = harness.run(&["calc", "foo+1"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown symbol: foo");
}

#[test]
fn test_tokens_are_normalized() {
    let harness = TestHarness::new();
    let output = harness.run(&["tokens", "2**x÷(1+.5)"]).unwrap();
    assert_eq!(output.stdout, "2 ^ x / ( 1 + 0.5 )");
}

#[test]
fn test_tokens_reports_lex_error() {
    let harness = TestHarness::new();
    let err = harness.run(&["tokens", "2 @ 3"]).unwrap_err();
    assert!(matches!(err, AppError::Eval(EvalError::Lex { position: 2, .. })));
}
