//! Frequency-domain retain-band filter.
//!
//! ## Purpose
//!
//! This module zeroes the middle of the Fourier descriptor spectrum,
//! keeping a contiguous band of low-frequency bins at each end of the
//! index range. Because DFT indices wrap around, the top indices are the
//! low negative frequencies; zeroing the middle removes only the
//! high-frequency content.
//!
//! ## Design notes
//!
//! * **Whole-bin granularity**: A bin is either kept intact or set to
//!   complex zero; real and imaginary parts are never split.
//! * **Odd split**: An odd retain count gives the extra bin to the
//!   positive-frequency (low-index) side, which includes DC.
//!
//! ## Invariants
//!
//! * Exactly `min(retain, N)` bins survive the filter unmodified.
//! * `retain >= N` is the identity filter.
//! * `retain == 0` zeroes everything including DC, collapsing the
//!   reconstruction to the origin.
//!
//! ## Non-goals
//!
//! * This module does not compute the retain count (see
//!   `engine::threshold`).

// External dependencies
use rustfft::{num_complex::Complex, FftNum};

// ============================================================================
// Retain-Band Filter
// ============================================================================

/// Zero every bin outside the retained band, in place.
///
/// Keeps bins `[0, ceil(retain/2))` and `[N - floor(retain/2), N)` and
/// zeroes the rest. Values of `retain` above N behave as N.
pub fn retain_band<T: FftNum>(bins: &mut [Complex<T>], retain: usize) {
    let n = bins.len();
    let retain = retain.min(n);

    let low = retain.div_ceil(2);
    let high = retain / 2;

    // low + high == retain <= n, so the range below is always valid;
    // it is empty exactly when retain == n.
    let zero = Complex::new(T::zero(), T::zero());
    for bin in &mut bins[low..n - high] {
        *bin = zero;
    }
}
