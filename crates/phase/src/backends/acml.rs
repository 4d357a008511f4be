//! AMD ACML-MV backend
//!
//! Binds the ACML vector math paired sincos routines (`vrsa_sincosf`, `vrda_sincos`).
//! ACML has no angle-to-complex routine, so complex output is assembled through the
//! default [`PhaseBackend::cis_f32`]/[`PhaseBackend::cis_f64`] scratch path.
//!
//! **Note**: Links against `acml_mv`. Set `ACML_DIR` to the directory holding the
//! library.

use core::ffi::c_int;

use super::vendor_pieces;
use crate::traits::PhaseBackend;

// ACML declares the input as non-const but never writes it.
#[link(name = "acml_mv")]
extern "C" {
    fn vrsa_sincosf(n: c_int, x: *const f32, ys: *mut f32, yc: *mut f32);
    fn vrda_sincos(n: c_int, x: *const f64, ys: *mut f64, yc: *mut f64);
}

/// AMD ACML-MV backend
#[derive(Copy, Clone, Debug, Default)]
pub struct Acml;

impl PhaseBackend for Acml {
    #[inline]
    fn name() -> &'static str {
        "acml"
    }

    #[inline]
    fn sincos_f32(phi: &[f32], sin: &mut [f32], cos: &mut [f32]) {
        for (p, s, c) in vendor_pieces(phi, sin, cos) {
            // SAFETY: `s` and `c` hold exactly `p.len()` elements, which fits in `c_int`.
            unsafe { vrsa_sincosf(p.len() as c_int, p.as_ptr(), s.as_mut_ptr(), c.as_mut_ptr()) }
        }
    }

    #[inline]
    fn sincos_f64(phi: &[f64], sin: &mut [f64], cos: &mut [f64]) {
        for (p, s, c) in vendor_pieces(phi, sin, cos) {
            // SAFETY: `s` and `c` hold exactly `p.len()` elements, which fits in `c_int`.
            unsafe { vrda_sincos(p.len() as c_int, p.as_ptr(), s.as_mut_ptr(), c.as_mut_ptr()) }
        }
    }
}
