//! Core phase-evaluation traits
//!
//! This module defines the contract every sine/cosine backend must satisfy and the
//! precision trait that routes `f32`/`f64` slices to the matching backend entry point.
//! Backends differ only in speed and last-bit accuracy, never in semantics.

use num_complex::{Complex, Complex32, Complex64};

use crate::backends::assemble_cis;

/// Vectorized sine/cosine backend
///
/// All backends (generic, MKL, ACML, MASSV) are zero-sized types implementing this
/// trait with static functions only, so selecting one costs nothing at runtime.
///
/// # Contract Requirements
///
/// 1. **Functional Equivalence**: every backend MUST agree with [`Generic`](crate::backends::Generic)
///    within its documented floating-point accuracy
/// 2. **Exact lengths**: callers pass `sin`, `cos` and `z` with exactly `phi.len()` elements
///    (the public functions in [`crate::phase`] guarantee this)
/// 3. **No allocations**: any scratch storage lives on the stack for the duration of the call
/// 4. **Precision consistency**: single-precision entry points never widen through `f64`
///
/// # Example
///
/// ```rust
/// use rigel_phase::backends::Generic;
/// use rigel_phase::PhaseBackend;
///
/// let phi = [0.0f64, core::f64::consts::FRAC_PI_2];
/// let mut sin = [0.0; 2];
/// let mut cos = [0.0; 2];
/// Generic::sincos_f64(&phi, &mut sin, &mut cos);
/// assert!((sin[1] - 1.0).abs() < 1e-12);
/// assert!((cos[0] - 1.0).abs() < 1e-12);
/// ```
pub trait PhaseBackend: Copy {
    /// Short lowercase backend identifier (`"generic"`, `"mkl"`, `"acml"`, `"massv"`)
    fn name() -> &'static str;

    /// Paired single-precision sine and cosine
    ///
    /// # Invariants
    /// - `sin.len() == cos.len() == phi.len()` (caller ensures)
    fn sincos_f32(phi: &[f32], sin: &mut [f32], cos: &mut [f32]);

    /// Paired double-precision sine and cosine
    ///
    /// # Invariants
    /// - `sin.len() == cos.len() == phi.len()` (caller ensures)
    fn sincos_f64(phi: &[f64], sin: &mut [f64], cos: &mut [f64]);

    /// Single-precision angle-to-complex (CIS): `z[i] = cos(phi[i]) + i·sin(phi[i])`
    ///
    /// Backends without a native CIS routine keep this default, which assembles the
    /// complex values from [`sincos_f32`](Self::sincos_f32) through stack scratch blocks.
    #[inline]
    fn cis_f32(phi: &[f32], z: &mut [Complex32]) {
        assemble_cis(phi, z, Self::sincos_f32);
    }

    /// Double-precision angle-to-complex (CIS): `z[i] = cos(phi[i]) + i·sin(phi[i])`
    #[inline]
    fn cis_f64(phi: &[f64], z: &mut [Complex64]) {
        assemble_cis(phi, z, Self::sincos_f64);
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point precisions supported by the phase evaluator
///
/// Implemented for `f32` and `f64` only. Generic code written against `T: Real`
/// gets both the single- and double-precision instantiations of every entry point.
pub trait Real:
    sealed::Sealed + Copy + Default + PartialOrd + core::fmt::Debug + Send + Sync + 'static
{
    /// Absolute tolerance the portable backend is held to for angles of moderate
    /// magnitude (1e-6 for `f32`, 1e-12 for `f64`)
    const EPSILON_PHASE: Self;

    /// Per-element combined sine and cosine, returned as `(sin, cos)`
    fn sin_cos(self) -> (Self, Self);

    /// Route a paired sincos call to the backend entry point of this precision
    fn sincos_with<B: PhaseBackend>(phi: &[Self], sin: &mut [Self], cos: &mut [Self]);

    /// Route a CIS call to the backend entry point of this precision
    fn cis_with<B: PhaseBackend>(phi: &[Self], z: &mut [Complex<Self>]);
}

impl Real for f32 {
    const EPSILON_PHASE: Self = 1e-6;

    #[inline(always)]
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }

    #[inline(always)]
    fn sincos_with<B: PhaseBackend>(phi: &[Self], sin: &mut [Self], cos: &mut [Self]) {
        B::sincos_f32(phi, sin, cos);
    }

    #[inline(always)]
    fn cis_with<B: PhaseBackend>(phi: &[Self], z: &mut [Complex<Self>]) {
        B::cis_f32(phi, z);
    }
}

impl Real for f64 {
    const EPSILON_PHASE: Self = 1e-12;

    #[inline(always)]
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    #[inline(always)]
    fn sincos_with<B: PhaseBackend>(phi: &[Self], sin: &mut [Self], cos: &mut [Self]) {
        B::sincos_f64(phi, sin, cos);
    }

    #[inline(always)]
    fn cis_with<B: PhaseBackend>(phi: &[Self], z: &mut [Complex<Self>]) {
        B::cis_f64(phi, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sin_cos_order_f32() {
        let (s, c) = Real::sin_cos(core::f32::consts::FRAC_PI_2);
        assert!((s - 1.0).abs() < 1e-6, "sin(π/2) should be 1, got {}", s);
        assert!(c.abs() < 1e-6, "cos(π/2) should be 0, got {}", c);
    }

    #[test]
    fn test_sin_cos_order_f64() {
        let (s, c) = Real::sin_cos(0.0f64);
        assert_eq!(s, 0.0);
        assert_eq!(c, 1.0);
    }

    #[test]
    fn test_tolerances_match_precision() {
        assert!(f32::EPSILON_PHASE > f32::EPSILON);
        assert!(f64::EPSILON_PHASE > f64::EPSILON);
        assert!((f64::EPSILON_PHASE as f32) < f32::EPSILON_PHASE);
    }
}
