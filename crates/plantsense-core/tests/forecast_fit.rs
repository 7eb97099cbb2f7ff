//! Forecast fitting tests on controlled sample sets.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use plantsense_core::forecast::{fit, predict_at, Sample};

fn samples(points: &[(f64, f64)]) -> Vec<Sample> {
    points.iter().map(|&(t, value)| Sample { t, value }).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn linear_fit_recovers_slope_and_intercept() {
    // y = 2t + 1
    let s = samples(&[(0.0, 1.0), (60.0, 121.0), (120.0, 241.0)]);
    let coeffs = fit(&s, 1).unwrap();
    assert_eq!(coeffs.len(), 2);
    assert_close(coeffs[0], 1.0);
    assert_close(coeffs[1], 2.0);
    assert_close(predict_at(&coeffs, 600.0), 1201.0);
}

#[test]
fn quadratic_fit_recovers_curvature() {
    // y = t^2 - 3t + 2
    let s = samples(&[(0.0, 2.0), (1.0, 0.0), (2.0, 0.0), (3.0, 2.0), (4.0, 6.0)]);
    let coeffs = fit(&s, 2).unwrap();
    assert_close(coeffs[0], 2.0);
    assert_close(coeffs[1], -3.0);
    assert_close(coeffs[2], 1.0);
    assert_close(predict_at(&coeffs, 10.0), 72.0);
}

#[test]
fn overdetermined_fit_averages_noise() {
    // Constant signal with symmetric noise fits back to the mean.
    let s = samples(&[(0.0, 9.0), (1.0, 11.0), (2.0, 9.0), (3.0, 11.0)]);
    let coeffs = fit(&s, 0).unwrap();
    assert_close(coeffs[0], 10.0);
}

#[test]
fn too_few_samples_is_not_enough_data() {
    let s = samples(&[(0.0, 1.0), (1.0, 2.0)]);
    let err = fit(&s, 2).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "NOT_ENOUGH_DATA");
}

#[test]
fn coincident_times_are_degenerate() {
    let s = samples(&[(5.0, 1.0), (5.0, 3.0)]);
    let err = fit(&s, 1).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "NOT_ENOUGH_DATA");
}
