#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! rigel-phase: Unit-phase evaluation over slices with compile-time backend selection
//!
//! This library computes e^{iφ} = cos φ + i·sin φ for arrays of angles, using the
//! fastest vector math library compiled into the build and falling back to a portable
//! per-element loop otherwise. It also provides the generic `copy_n`/`accumulate_n`
//! inner-loop primitives.
//!
//! # Features
//!
//! - **One signature, any backend**: `eval_phase*` look the same whichever backend is active
//! - **Compile-time backend selection**: `mkl`, `acml` or `massv` via cargo features
//! - **Single and double precision**: every entry point is generic over `f32`/`f64`
//! - **No allocations**: scratch storage is stack-based, real-time safe
//! - **no_std**: portable backend built on `libm`

// Scalar reference math (sincos primitive for the generic backend)
extern crate libm;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Phase evaluation entry points
pub mod phase;

// Array primitives
pub mod algorithm;

// Public re-exports for convenience
pub use traits::{PhaseBackend, Real};

pub use backends::{ActiveBackend, Generic};

pub use phase::{
    eval_phase, eval_phase_into, eval_phase_split, eval_phase_split_with, eval_phase_with,
};

pub use algorithm::{accumulate_n, copy_n};

pub use num_complex::{Complex, Complex32, Complex64};

/// Name of the backend selected at compile time (`"mkl"`, `"acml"`, `"massv"` or `"generic"`)
///
/// # Example
///
/// ```rust
/// let name = rigel_phase::backend_name();
/// assert!(["mkl", "acml", "massv", "generic"].contains(&name));
/// ```
#[inline]
pub fn backend_name() -> &'static str {
    ActiveBackend::name()
}
