//! FILENAME: tests/test_plot.rs
//! Integration tests for the plot command and config handling.

mod common;

use app_lib::AppError;
use common::TestHarness;
use engine::{EvalError, PlotError};

#[test]
fn test_plot_csv_has_one_row_per_point() {
    let harness = TestHarness::new();
    let output = harness
        .run(&["plot", "x^2", "--min", "-1", "--max", "1", "--points", "3"])
        .unwrap();

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines[0], "function,color,x,y");
    assert_eq!(lines[1], "\"x^2\",#2196F3,-1,1");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_plot_notes_skipped_points() {
    let harness = TestHarness::new();
    let output = harness
        .run(&["plot", "sqrt(x)", "--min", "-5", "--max", "5", "--points", "11"])
        .unwrap();

    assert_eq!(output.stdout.lines().count(), 1 + 6);
    assert_eq!(
        output.stderr,
        vec!["f(x) = sqrt(x): 5 point(s) skipped (outside domain)".to_string()]
    );
}

#[test]
fn test_plot_multiple_functions_as_json() {
    let harness = TestHarness::new();
    let output = harness
        .run(&[
            "plot", "f(x) = 2x", "sin(x)", "--points", "5", "--format", "json",
        ])
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let functions = json["functions"].as_array().unwrap();
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[1]["colorIndex"], 1);
    assert_eq!(functions[0]["samples"]["points"].as_array().unwrap().len(), 5);
    assert_eq!(json["range"]["xMin"], -10.0);
}

#[test]
fn test_plot_rejects_broken_function() {
    let harness = TestHarness::new();
    let err = harness.run(&["plot", "x", "2+"]).unwrap_err();
    match err {
        AppError::Plot { expression, source } => {
            assert_eq!(expression, "2+");
            assert!(matches!(source, PlotError::Eval(EvalError::Syntax { .. })));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_plot_rejects_function_with_no_points() {
    let harness = TestHarness::new();
    let err = harness
        .run(&["plot", "sqrt(x)", "--min", "-5", "--max", "-1"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not plot function sqrt(x): Could not evaluate function: sqrt(x)"
    );
}

#[test]
fn test_plot_rejects_inverted_range() {
    let harness = TestHarness::new();
    let err = harness
        .run(&["plot", "x", "--min", "5", "--max", "1"])
        .unwrap_err();
    assert!(matches!(err, AppError::Eval(EvalError::Evaluation { .. })));
}

#[test]
fn test_config_file_sets_range_and_format() {
    let harness = TestHarness::new();
    let config = harness.write_config(
        r#"{"graph": {"xMin": 0.0, "xMax": 2.0, "sampleCount": 3}, "output": "json"}"#,
    );
    let config_arg = config.to_string_lossy().to_string();

    let output = harness.run(&["--config", &config_arg, "plot", "x"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let points = json["functions"][0]["samples"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[2][0], 2.0);
}

#[test]
fn test_flags_override_config_file() {
    let harness = TestHarness::new();
    let config = harness.write_config(r#"{"graph": {"sampleCount": 3}}"#);
    let config_arg = config.to_string_lossy().to_string();

    let output = harness
        .run(&["--config", &config_arg, "plot", "x", "--points", "2"])
        .unwrap();
    assert_eq!(output.stdout.lines().count(), 1 + 2);
}

#[test]
fn test_invalid_config_file_is_reported() {
    let harness = TestHarness::new();
    let config = harness.write_config("{ not json");
    let config_arg = config.to_string_lossy().to_string();

    let err = harness.run(&["--config", &config_arg, "calc", "1"]).unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));
}
