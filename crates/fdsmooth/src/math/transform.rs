//! Forward and scaled inverse discrete Fourier transforms.
//!
//! ## Purpose
//!
//! This module wraps `rustfft` to transform a contour's complex sample
//! sequence into Fourier descriptors and back. The forward transform is
//! the standard unnormalized DFT; the inverse divides each output sample
//! by N so an unfiltered round trip reproduces the input up to
//! floating-point error.
//!
//! ## Design notes
//!
//! * **In-place**: Both directions mutate the caller's buffer; the sample
//!   count never changes.
//! * **Any N**: `rustfft` plans mixed-radix FFTs, so results match the
//!   direct DFT definition for every length, not only powers of two.
//! * **Generics**: Generic over `FftNum + Float` working types (f32/f64).
//!
//! ## Invariants
//!
//! * Bin 0 of the forward output is the DC component (sum of samples).
//! * Bins 1..floor(N/2) are increasing positive frequencies; the upper
//!   indices hold the negative-frequency mirror.
//!
//! ## Non-goals
//!
//! * This module does not filter bins (see `math::filter`).
//! * This module does not round or marshal contour vertices.

// External dependencies
use num_traits::Float;
use rustfft::{num_complex::Complex, FftNum, FftPlanner};

// ============================================================================
// Forward Transform
// ============================================================================

/// Compute the forward DFT of `bins` in place.
///
/// No normalization is applied at this stage; bin k equals
/// `sum_n sample_n * e^(-2*pi*i*k*n/N)`.
pub fn forward<T: FftNum>(bins: &mut [Complex<T>]) {
    if bins.is_empty() {
        return;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(bins.len());
    fft.process(bins);
}

// ============================================================================
// Scaled Inverse Transform
// ============================================================================

/// Compute the scaled inverse DFT of `bins` in place.
///
/// Each output sample is divided by N, so `forward` followed by `inverse`
/// is the identity up to floating-point error.
pub fn inverse<T: FftNum + Float>(bins: &mut [Complex<T>]) {
    let n = bins.len();
    if n == 0 {
        return;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_inverse(n);
    fft.process(bins);

    let scale = T::from(n).unwrap();
    for bin in bins.iter_mut() {
        *bin = bin.unscale(scale);
    }
}
