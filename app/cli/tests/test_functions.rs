//! FILENAME: tests/test_functions.rs
//! Integration tests for the scientific function commands.

mod common;

use common::TestHarness;
use smartcalc_lib::{Reply, ERROR_DISPLAY};

fn display_value(harness: &TestHarness) -> f64 {
    harness.display().parse().unwrap()
}

#[test]
fn test_functions_rejected_outside_scientific_mode() {
    let harness = TestHarness::new();
    harness.send("90");
    match harness.send("sin") {
        Reply::Notice(text) => assert!(text.contains("scientific mode")),
        other => panic!("Expected a notice, got {:?}", other),
    }
    assert_eq!(harness.display(), "90");
}

#[test]
fn test_sci_toggles_mode() {
    let harness = TestHarness::new();
    assert_eq!(harness.send("sci"), Reply::Notice("scientific mode on".to_string()));
    assert_eq!(harness.send("sci"), Reply::Notice("scientific mode off".to_string()));
}

#[test]
fn test_sine_of_ninety_degrees() {
    let harness = TestHarness::scientific();
    harness.send_all(&["90", "sin"]);
    assert!((display_value(&harness) - 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_of_sixty_degrees() {
    let harness = TestHarness::scientific();
    harness.send_all(&["60", "cos"]);
    assert!((display_value(&harness) - 0.5).abs() < 1e-12);
}

#[test]
fn test_tangent_of_forty_five_degrees() {
    let harness = TestHarness::scientific();
    harness.send_all(&["45", "TAN"]);
    assert!((display_value(&harness) - 1.0).abs() < 1e-12);
}

#[test]
fn test_log_applies_to_evaluated_result() {
    let harness = TestHarness::scientific();
    harness.send_all(&["10*10=", "log"]);
    assert!((display_value(&harness) - 2.0).abs() < 1e-12);
}

#[test]
fn test_sqrt_of_negative_is_nan() {
    let harness = TestHarness::scientific();
    assert_eq!(harness.send_all(&["-4", "sqrt"]), "NaN");
}

#[test]
fn test_function_on_unevaluated_expression_shows_error() {
    let harness = TestHarness::scientific();
    assert_eq!(harness.send_all(&["2+2", "sqrt"]), ERROR_DISPLAY);
}

#[test]
fn test_function_on_empty_display_shows_error() {
    let harness = TestHarness::scientific();
    assert_eq!(harness.send_all(&["sqrt"]), ERROR_DISPLAY);
}
