//! Unit-phase evaluation: e^{iφ} = cos φ + i·sin φ
//!
//! Every entry point is generic over [`Real`] (`f32` or `f64`) and comes in three
//! data shapes:
//!
//! - [`eval_phase_split`]: cosines and sines into two separate arrays
//! - [`eval_phase`]: interleaved [`Complex`] output
//! - [`eval_phase_into`]: whole-container wrapper over [`eval_phase`]
//!
//! All of them run on [`ActiveBackend`], fixed at compile time. The `_with` variants
//! take the backend as a type parameter, which is how vendor backends are checked
//! against [`Generic`](crate::backends::Generic).
//!
//! # Contract
//!
//! - `n = phi.len()`; only the first `n` output elements are written
//! - `n = 0` is a no-op
//! - No angle normalization is performed; accuracy for huge angles is whatever the
//!   backend provides
//!
//! # Panics
//!
//! Output slices shorter than `phi` panic before any backend runs.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use rigel_phase::eval_phase;
//!
//! let phi = [0.0, core::f64::consts::FRAC_PI_2, core::f64::consts::PI];
//! let mut z = [Complex64::new(0.0, 0.0); 3];
//! eval_phase(&phi, &mut z);
//!
//! assert!((z[0].re - 1.0).abs() < 1e-12 && z[0].im.abs() < 1e-12);
//! assert!(z[1].re.abs() < 1e-12 && (z[1].im - 1.0).abs() < 1e-12);
//! assert!((z[2].re + 1.0).abs() < 1e-12 && z[2].im.abs() < 1e-12);
//! ```

use num_complex::Complex;

use crate::backends::ActiveBackend;
use crate::traits::{PhaseBackend, Real};

/// Evaluate cosines and sines of `phi` into separate arrays
///
/// Writes `out_cos[i] = cos(phi[i])` and `out_sin[i] = sin(phi[i])` for `i < phi.len()`.
///
/// # Panics
///
/// Panics if either output holds fewer than `phi.len()` elements.
///
/// # Example
///
/// ```rust
/// use rigel_phase::eval_phase_split;
///
/// let phi = [0.0f32, core::f32::consts::PI];
/// let mut re = [0.0f32; 2];
/// let mut im = [0.0f32; 2];
/// eval_phase_split(&phi, &mut re, &mut im);
///
/// assert!((re[1] + 1.0).abs() < 1e-6);
/// assert!(im[0].abs() < 1e-6);
/// ```
#[inline]
pub fn eval_phase_split<T: Real>(phi: &[T], out_cos: &mut [T], out_sin: &mut [T]) {
    eval_phase_split_with::<ActiveBackend, T>(phi, out_cos, out_sin);
}

/// [`eval_phase_split`] on an explicitly chosen backend
#[inline]
pub fn eval_phase_split_with<B: PhaseBackend, T: Real>(
    phi: &[T],
    out_cos: &mut [T],
    out_sin: &mut [T],
) {
    let n = phi.len();
    assert!(
        out_cos.len() >= n,
        "cosine output holds {} elements, need at least {}",
        out_cos.len(),
        n
    );
    assert!(
        out_sin.len() >= n,
        "sine output holds {} elements, need at least {}",
        out_sin.len(),
        n
    );

    if n == 0 {
        return;
    }

    T::sincos_with::<B>(phi, &mut out_sin[..n], &mut out_cos[..n]);
}

/// Evaluate e^{iφ} for every angle into interleaved complex output
///
/// Writes `out[i] = cos(phi[i]) + i·sin(phi[i])` for `i < phi.len()`.
///
/// # Panics
///
/// Panics if `out` holds fewer than `phi.len()` elements.
#[inline]
pub fn eval_phase<T: Real>(phi: &[T], out: &mut [Complex<T>]) {
    eval_phase_with::<ActiveBackend, T>(phi, out);
}

/// [`eval_phase`] on an explicitly chosen backend
#[inline]
pub fn eval_phase_with<B: PhaseBackend, T: Real>(phi: &[T], out: &mut [Complex<T>]) {
    let n = phi.len();
    assert!(
        out.len() >= n,
        "complex output holds {} elements, need at least {}",
        out.len(),
        n
    );

    if n == 0 {
        return;
    }

    T::cis_with::<B>(phi, &mut out[..n]);
}

/// Whole-container convenience wrapper over [`eval_phase`]
///
/// Accepts anything viewable as a slice (`Vec`, arrays, boxed slices).
///
/// # Panics
///
/// Panics if the two containers differ in length.
///
/// # Example
///
/// ```rust
/// use num_complex::Complex32;
/// use rigel_phase::eval_phase_into;
///
/// let phi = vec![0.25f32; 16];
/// let mut z = vec![Complex32::new(0.0, 0.0); 16];
/// eval_phase_into(&phi, &mut z);
///
/// assert!(z.iter().all(|c| (c.norm_sqr() - 1.0).abs() < 1e-5));
/// ```
#[inline]
pub fn eval_phase_into<T, P, Z>(phi: &P, out: &mut Z)
where
    T: Real,
    P: AsRef<[T]> + ?Sized,
    Z: AsMut<[Complex<T>]> + ?Sized,
{
    let phi = phi.as_ref();
    let out = out.as_mut();
    assert_eq!(
        phi.len(),
        out.len(),
        "phase and output containers must have the same length"
    );

    eval_phase(phi, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::Generic;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_split_leaves_tail_untouched() {
        let phi = [0.0f64, 1.0];
        let mut re = [7.0f64; 4];
        let mut im = [7.0f64; 4];

        eval_phase_split(&phi, &mut re, &mut im);

        assert_eq!(&re[2..], &[7.0, 7.0]);
        assert_eq!(&im[2..], &[7.0, 7.0]);
        assert!((re[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_leaves_tail_untouched() {
        let phi = [0.5f32];
        let sentinel = Complex32::new(3.0, 4.0);
        let mut z = [sentinel; 3];

        eval_phase(&phi, &mut z);

        assert_eq!(z[1], sentinel);
        assert_eq!(z[2], sentinel);
    }

    #[test]
    fn test_empty_input_is_noop() {
        let phi: [f64; 0] = [];
        let sentinel = Complex64::new(5.0, 6.0);
        let mut z = [sentinel; 2];
        let mut re: [f64; 0] = [];
        let mut im: [f64; 0] = [];

        eval_phase(&phi, &mut z);
        eval_phase_split(&phi, &mut re, &mut im);

        assert_eq!(z, [sentinel; 2]);
    }

    #[test]
    #[should_panic(expected = "complex output holds")]
    fn test_short_complex_output_panics() {
        let phi = [0.0f32; 4];
        let mut z = [Complex32::new(0.0, 0.0); 3];
        eval_phase(&phi, &mut z);
    }

    #[test]
    #[should_panic(expected = "sine output holds")]
    fn test_short_sine_output_panics() {
        let phi = [0.0f64; 2];
        let mut re = [0.0f64; 2];
        let mut im = [0.0f64; 1];
        eval_phase_split(&phi, &mut re, &mut im);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_container_length_mismatch_panics() {
        let phi = [0.0f64; 3];
        let mut z = [Complex64::new(0.0, 0.0); 4];
        eval_phase_into(&phi, &mut z);
    }

    #[test]
    fn test_explicit_generic_backend() {
        let phi = [core::f64::consts::FRAC_PI_4];
        let mut z = [Complex64::new(0.0, 0.0)];
        eval_phase_with::<Generic, f64>(&phi, &mut z);

        let h = core::f64::consts::FRAC_1_SQRT_2;
        assert!((z[0].re - h).abs() < 1e-12);
        assert!((z[0].im - h).abs() < 1e-12);
    }
}
