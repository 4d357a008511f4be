//! Intel MKL Vector Mathematics backend
//!
//! Binds the VM paired sincos routines (`vsSinCos`, `vdSinCos`) and the native
//! angle-to-complex routines (`vcCIS`, `vzCIS`). MKL writes interleaved complex
//! output directly, so no scratch is needed on either path.
//!
//! **Note**: Links against `mkl_rt`. Set `MKLROOT` so the build script can emit
//! the library search path.

use core::ffi::c_int;

use num_complex::{Complex32, Complex64};

use super::{vendor_pieces, VENDOR_MAX_COUNT};
use crate::traits::PhaseBackend;

// `MKL_INT` is 32-bit under the LP64 interface `mkl_rt` defaults to.
type MklInt = c_int;

// `MKL_Complex8`/`MKL_Complex16` are `{ real, imag }` structs, layout-identical to
// `#[repr(C)]` `Complex<f32>`/`Complex<f64>`.
#[link(name = "mkl_rt")]
extern "C" {
    fn vsSinCos(n: MklInt, a: *const f32, y: *mut f32, z: *mut f32);
    fn vdSinCos(n: MklInt, a: *const f64, y: *mut f64, z: *mut f64);
    fn vcCIS(n: MklInt, a: *const f32, y: *mut Complex32);
    fn vzCIS(n: MklInt, a: *const f64, y: *mut Complex64);
}

/// Intel MKL backend
///
/// Highest-priority vendor backend and the only one with native CIS.
#[derive(Copy, Clone, Debug, Default)]
pub struct Mkl;

impl PhaseBackend for Mkl {
    #[inline]
    fn name() -> &'static str {
        "mkl"
    }

    #[inline]
    fn sincos_f32(phi: &[f32], sin: &mut [f32], cos: &mut [f32]) {
        for (p, s, c) in vendor_pieces(phi, sin, cos) {
            // SAFETY: `s` and `c` hold exactly `p.len()` elements, which fits in `MklInt`.
            unsafe { vsSinCos(p.len() as MklInt, p.as_ptr(), s.as_mut_ptr(), c.as_mut_ptr()) }
        }
    }

    #[inline]
    fn sincos_f64(phi: &[f64], sin: &mut [f64], cos: &mut [f64]) {
        for (p, s, c) in vendor_pieces(phi, sin, cos) {
            // SAFETY: `s` and `c` hold exactly `p.len()` elements, which fits in `MklInt`.
            unsafe { vdSinCos(p.len() as MklInt, p.as_ptr(), s.as_mut_ptr(), c.as_mut_ptr()) }
        }
    }

    #[inline]
    fn cis_f32(phi: &[f32], z: &mut [Complex32]) {
        debug_assert_eq!(phi.len(), z.len());
        for (p, out) in phi
            .chunks(VENDOR_MAX_COUNT)
            .zip(z.chunks_mut(VENDOR_MAX_COUNT))
        {
            // SAFETY: `out` holds exactly `p.len()` complex values, which fits in `MklInt`.
            unsafe { vcCIS(p.len() as MklInt, p.as_ptr(), out.as_mut_ptr()) }
        }
    }

    #[inline]
    fn cis_f64(phi: &[f64], z: &mut [Complex64]) {
        debug_assert_eq!(phi.len(), z.len());
        for (p, out) in phi
            .chunks(VENDOR_MAX_COUNT)
            .zip(z.chunks_mut(VENDOR_MAX_COUNT))
        {
            // SAFETY: `out` holds exactly `p.len()` complex values, which fits in `MklInt`.
            unsafe { vzCIS(p.len() as MklInt, p.as_ptr(), out.as_mut_ptr()) }
        }
    }
}
