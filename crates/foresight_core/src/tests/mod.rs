//! Tests for the sweep evaluator
//!
//! Tests are organized by topic:
//! - `formulas` - Closed-form results at single parameter points
//! - `sweeps` - Sweep ranges, linked axes and study evaluation
//! - `conditions` - FHWC / RIC checks and patience regimes
//! - `catalog` - The built-in study and its figures

mod catalog;
mod conditions;
mod sweeps;

/// Assert two floats agree to within `tol`
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} +/- {tol}, got {actual}"
    );
}
