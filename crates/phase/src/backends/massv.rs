//! IBM MASSV backend
//!
//! Binds the MASS vector library paired sincos routines (`vssincos`, `vsincos`).
//! MASSV takes outputs first and the element count by pointer. Complex output is
//! assembled through the default scratch path, in the caller's precision throughout.
//!
//! **Note**: Links against `massv`. Set `MASSV_DIR` to the directory holding the
//! library.

use core::ffi::c_int;

use super::vendor_pieces;
use crate::traits::PhaseBackend;

#[link(name = "massv")]
extern "C" {
    fn vssincos(s: *mut f32, c: *mut f32, x: *const f32, n: *const c_int);
    fn vsincos(s: *mut f64, c: *mut f64, x: *const f64, n: *const c_int);
}

/// IBM MASSV backend
#[derive(Copy, Clone, Debug, Default)]
pub struct Massv;

impl PhaseBackend for Massv {
    #[inline]
    fn name() -> &'static str {
        "massv"
    }

    #[inline]
    fn sincos_f32(phi: &[f32], sin: &mut [f32], cos: &mut [f32]) {
        for (p, s, c) in vendor_pieces(phi, sin, cos) {
            let n = p.len() as c_int;
            // SAFETY: `s` and `c` hold exactly `n` elements; `n` outlives the call.
            unsafe { vssincos(s.as_mut_ptr(), c.as_mut_ptr(), p.as_ptr(), &n) }
        }
    }

    #[inline]
    fn sincos_f64(phi: &[f64], sin: &mut [f64], cos: &mut [f64]) {
        for (p, s, c) in vendor_pieces(phi, sin, cos) {
            let n = p.len() as c_int;
            // SAFETY: `s` and `c` hold exactly `n` elements; `n` outlives the call.
            unsafe { vsincos(s.as_mut_ptr(), c.as_mut_ptr(), p.as_ptr(), &n) }
        }
    }
}
