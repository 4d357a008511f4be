//! Test utilities for rigel-phase
//!
//! Reference implementations and proptest strategies, plus tolerance assertions
//! for validating phase evaluation across backends.

#![allow(dead_code)]

use proptest::prelude::*;
use rigel_phase::{Complex, Real};

/// Absolute tolerance for single-precision phase values
pub const F32_TOLERANCE: f32 = <f32 as Real>::EPSILON_PHASE;

/// Absolute tolerance for double-precision phase values
pub const F64_TOLERANCE: f64 = <f64 as Real>::EPSILON_PHASE;

// ============================================================================
// Reference Implementations using libm
// ============================================================================

/// Reference e^{iφ} in single precision
#[inline]
pub fn ref_cis_f32(phi: f32) -> (f32, f32) {
    (libm::cosf(phi), libm::sinf(phi))
}

/// Reference e^{iφ} in double precision
#[inline]
pub fn ref_cis_f64(phi: f64) -> (f64, f64) {
    (libm::cos(phi), libm::sin(phi))
}

/// Strictly sequential left-to-right sum, used to bound reassociation error
pub fn sequential_sum(values: &[f64], initial: f64) -> f64 {
    let mut acc = initial;
    for &v in values {
        acc += v;
    }
    acc
}

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Angles within a few turns of zero, where every backend is expected to be accurate
pub fn angle_f32() -> impl Strategy<Value = f32> {
    -20.0f32..=20.0f32
}

/// Angles within a few turns of zero, double precision
pub fn angle_f64() -> impl Strategy<Value = f64> {
    -20.0f64..=20.0f64
}

/// Angle arrays of varying length, including empty and multi-block lengths
pub fn angles_f32() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(angle_f32(), 0..300)
}

/// Angle arrays of varying length, double precision
pub fn angles_f64() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(angle_f64(), 0..300)
}

/// Moderate-magnitude summands for reduction tests
pub fn summands_f64() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..=1000.0f64, 0..200)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert two f32 values agree within an absolute tolerance
pub fn assert_close_f32(actual: f32, expected: f32, tolerance: f32, context: &str) {
    let error = (actual - expected).abs();
    assert!(
        error <= tolerance,
        "{}: got {}, expected {} (error {:e} > {:e})",
        context,
        actual,
        expected,
        error,
        tolerance
    );
}

/// Assert two f64 values agree within an absolute tolerance
pub fn assert_close_f64(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let error = (actual - expected).abs();
    assert!(
        error <= tolerance,
        "{}: got {}, expected {} (error {:e} > {:e})",
        context,
        actual,
        expected,
        error,
        tolerance
    );
}

/// Assert complex single-precision output matches the libm reference element-wise
pub fn assert_cis_f32(phi: &[f32], z: &[Complex<f32>], tolerance: f32) {
    for (i, (&p, c)) in phi.iter().zip(z).enumerate() {
        let (re, im) = ref_cis_f32(p);
        assert_close_f32(c.re, re, tolerance, &format!("re[{}] for phi={}", i, p));
        assert_close_f32(c.im, im, tolerance, &format!("im[{}] for phi={}", i, p));
    }
}

/// Assert complex double-precision output matches the libm reference element-wise
pub fn assert_cis_f64(phi: &[f64], z: &[Complex<f64>], tolerance: f64) {
    for (i, (&p, c)) in phi.iter().zip(z).enumerate() {
        let (re, im) = ref_cis_f64(p);
        assert_close_f64(c.re, re, tolerance, &format!("re[{}] for phi={}", i, p));
        assert_close_f64(c.im, im, tolerance, &format!("im[{}] for phi={}", i, p));
    }
}

/// Evenly spaced angles over `[start, end)`
pub fn linspace_f64(start: f64, end: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| start + (end - start) * i as f64 / len as f64)
        .collect()
}
