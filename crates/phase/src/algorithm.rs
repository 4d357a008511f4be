//! Vectorization-friendly array primitives
//!
//! Generic inner-loop building blocks: an elementwise copy and a sum reduction.
//! Both have a single implementation for every element type.

use core::ops::Add;

/// Number of independent partial sums kept by [`accumulate_n`]
///
/// Eight lanes cover an AVX2 `f32` register (and two AVX2 `f64` registers), which is
/// enough independent accumulators for the compiler to emit packed adds.
pub const REDUCTION_LANES: usize = 8;

/// Copy `count` elements from `source` into `destination`
///
/// Returns `destination` so calls can be chained. After the call
/// `destination[i] == source[i]` for every `i < count`; later elements are untouched.
///
/// # Panics
///
/// Panics if either slice holds fewer than `count` elements.
///
/// # Example
///
/// ```rust
/// use rigel_phase::algorithm::copy_n;
///
/// let src = [5, 6, 7];
/// let mut dst = [0; 3];
/// assert_eq!(copy_n(&src, 3, &mut dst), &[5, 6, 7]);
/// ```
#[inline]
pub fn copy_n<'a, T: Copy>(source: &[T], count: usize, destination: &'a mut [T]) -> &'a mut [T] {
    destination[..count].copy_from_slice(&source[..count]);
    destination
}

/// Sum `count` elements of `source` onto `initial`
///
/// Returns `initial + Σ source[i]` for `i < count`. Elements are converted into the
/// accumulator type first, so `f32` data can be summed in `f64`.
///
/// # Summation Order
///
/// The sum is split across [`REDUCTION_LANES`] independent partial accumulators so it
/// vectorizes. The order of additions is therefore unspecified: floating-point results
/// may differ in the last bits from a strict left-to-right sum. Integer sums are exact.
/// Lanes are seeded from the data rather than from zero, so an all `-0.0` sum stays `-0.0`.
///
/// # Panics
///
/// Panics if `source` holds fewer than `count` elements.
///
/// # Example
///
/// ```rust
/// use rigel_phase::algorithm::accumulate_n;
///
/// assert_eq!(accumulate_n(&[1.0f64, 2.0, 3.0, 4.0], 4, 0.0f64), 10.0);
/// assert_eq!(accumulate_n(&[1.5f32, 2.5], 2, 1.0f64), 5.0);
/// ```
#[inline]
pub fn accumulate_n<T, A>(source: &[T], count: usize, initial: A) -> A
where
    T: Copy,
    A: Copy + Add<Output = A> + From<T>,
{
    let mut blocks = source[..count].chunks_exact(REDUCTION_LANES);
    let mut total = initial;

    if let Some(first) = blocks.next() {
        let mut lanes: [A; REDUCTION_LANES] = core::array::from_fn(|i| A::from(first[i]));

        for block in &mut blocks {
            for (lane, &x) in lanes.iter_mut().zip(block) {
                *lane = *lane + A::from(x);
            }
        }

        // Pairwise fold keeps the lane combine balanced.
        let mut width = REDUCTION_LANES;
        while width > 1 {
            width /= 2;
            for i in 0..width {
                lanes[i] = lanes[i] + lanes[i + width];
            }
        }

        total = total + lanes[0];
    }

    for &x in blocks.remainder() {
        total = total + A::from(x);
    }

    total
}
