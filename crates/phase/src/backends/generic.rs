//! Generic backend implementation
//!
//! This backend evaluates one angle at a time with the combined `libm` sincos primitive.
//! It has no external dependency and works in `no_std` on every platform. It is the
//! reference every vendor backend is checked against.

use num_complex::{Complex, Complex32, Complex64};

use crate::traits::{PhaseBackend, Real};

/// Generic backend (no vendor library)
///
/// Zero-sized type that evaluates each angle with [`Real::sin_cos`]. The loops have
/// no cross-iteration dependency, so the compiler is free to unroll or vectorize them.
#[derive(Copy, Clone, Debug, Default)]
pub struct Generic;

impl PhaseBackend for Generic {
    #[inline]
    fn name() -> &'static str {
        "generic"
    }

    #[inline]
    fn sincos_f32(phi: &[f32], sin: &mut [f32], cos: &mut [f32]) {
        sincos_each(phi, sin, cos);
    }

    #[inline]
    fn sincos_f64(phi: &[f64], sin: &mut [f64], cos: &mut [f64]) {
        sincos_each(phi, sin, cos);
    }

    #[inline]
    fn cis_f32(phi: &[f32], z: &mut [Complex32]) {
        cis_each(phi, z);
    }

    #[inline]
    fn cis_f64(phi: &[f64], z: &mut [Complex64]) {
        cis_each(phi, z);
    }
}

#[inline(always)]
fn sincos_each<T: Real>(phi: &[T], sin: &mut [T], cos: &mut [T]) {
    for ((&p, s), c) in phi.iter().zip(sin.iter_mut()).zip(cos.iter_mut()) {
        (*s, *c) = Real::sin_cos(p);
    }
}

// Complex values are built inline; no scratch needed.
#[inline(always)]
fn cis_each<T: Real>(phi: &[T], z: &mut [Complex<T>]) {
    for (&p, out) in phi.iter().zip(z.iter_mut()) {
        let (s, c) = Real::sin_cos(p);
        *out = Complex::new(c, s);
    }
}
