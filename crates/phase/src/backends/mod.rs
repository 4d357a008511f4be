//! Sine/cosine backend implementations
//!
//! This module contains the vector math backends selected at compile time via cargo
//! features. Exactly one backend is active per build and is exposed as [`ActiveBackend`]:
//!
//! | Backend   | Feature | Priority | Native CIS |
//! |-----------|---------|----------|------------|
//! | [`Mkl`]   | `mkl`   | 1        | yes        |
//! | [`Acml`]  | `acml`  | 2        | no         |
//! | [`Massv`] | `massv` | 3        | no         |
//! | [`Generic`] | (none) | fallback | inline loop |
//!
//! Enabling more than one vendor feature is allowed; the highest priority wins.

use num_complex::Complex;

use crate::traits::Real;

// Generic backend (always available as fallback and as the reference implementation)
pub mod generic;

// Vendor backends (feature-gated)
#[cfg(feature = "mkl")]
pub mod mkl;

#[cfg(feature = "acml")]
pub mod acml;

#[cfg(feature = "massv")]
pub mod massv;

pub use generic::Generic;

#[cfg(feature = "mkl")]
pub use mkl::Mkl;

#[cfg(feature = "acml")]
pub use acml::Acml;

#[cfg(feature = "massv")]
pub use massv::Massv;

/// Backend selected at compile time (MKL)
#[cfg(feature = "mkl")]
pub type ActiveBackend = Mkl;

/// Backend selected at compile time (ACML)
#[cfg(all(feature = "acml", not(feature = "mkl")))]
pub type ActiveBackend = Acml;

/// Backend selected at compile time (MASSV)
#[cfg(all(feature = "massv", not(any(feature = "mkl", feature = "acml"))))]
pub type ActiveBackend = Massv;

/// Backend selected at compile time
///
/// Resolves to the highest-priority enabled vendor backend, or to [`Generic`]
/// when no vendor feature is enabled:
/// - `mkl` feature: [`Mkl`]
/// - `acml` feature: [`Acml`]
/// - `massv` feature: [`Massv`]
/// - none (default): [`Generic`]
#[cfg(not(any(feature = "mkl", feature = "acml", feature = "massv")))]
pub type ActiveBackend = Generic;

/// Number of elements per component in the stack scratch blocks used to assemble
/// complex output from backends that only provide paired sincos
pub const SCRATCH_LEN: usize = 64;

/// Largest element count passed to a vendor routine in one call (vendor counts are C `int`)
#[cfg(any(feature = "mkl", feature = "acml", feature = "massv"))]
pub(crate) const VENDOR_MAX_COUNT: usize = i32::MAX as usize;

/// Assemble complex output from a paired sincos kernel
///
/// Walks `phi` in blocks of [`SCRATCH_LEN`] angles, evaluates each block into two
/// stack scratch arrays of the same precision as `phi`, then interleaves them into `z`.
/// Scratch storage never outlives the call.
///
/// # Arguments
///
/// - `phi`: Input angles in radians
/// - `z`: Complex output (must be same length as `phi`)
/// - `sincos`: Paired kernel writing `(sin, cos)` for a block
#[inline]
pub fn assemble_cis<T, F>(phi: &[T], z: &mut [Complex<T>], sincos: F)
where
    T: Real,
    F: Fn(&[T], &mut [T], &mut [T]),
{
    debug_assert_eq!(phi.len(), z.len(), "phase and output lengths differ");

    let mut sin = [T::default(); SCRATCH_LEN];
    let mut cos = [T::default(); SCRATCH_LEN];

    for (angles, out) in phi.chunks(SCRATCH_LEN).zip(z.chunks_mut(SCRATCH_LEN)) {
        let len = angles.len();
        sincos(angles, &mut sin[..len], &mut cos[..len]);

        for ((dst, &c), &s) in out.iter_mut().zip(&cos[..len]).zip(&sin[..len]) {
            *dst = Complex::new(c, s);
        }
    }
}

/// Walk three slices in lockstep pieces small enough for a vendor `int` count
#[cfg(any(feature = "mkl", feature = "acml", feature = "massv"))]
#[inline]
pub(crate) fn vendor_pieces<'a, T>(
    phi: &'a [T],
    sin: &'a mut [T],
    cos: &'a mut [T],
) -> impl Iterator<Item = (&'a [T], &'a mut [T], &'a mut [T])> {
    debug_assert_eq!(phi.len(), sin.len());
    debug_assert_eq!(phi.len(), cos.len());

    phi.chunks(VENDOR_MAX_COUNT)
        .zip(sin.chunks_mut(VENDOR_MAX_COUNT))
        .zip(cos.chunks_mut(VENDOR_MAX_COUNT))
        .map(|((p, s), c)| (p, s, c))
}
