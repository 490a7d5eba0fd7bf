#![cfg(feature = "dev")]
//! Conformance tests for the FFT-backed transforms.
//!
//! These tests cross-validate the production FFT path against the direct
//! O(N^2) DFT definition on small inputs, including non-power-of-two
//! lengths, and check the scaled-inverse round trip.
//!
//! ## Test Organization
//!
//! 1. **Forward Conformance** - FFT matches direct summation
//! 2. **Inverse Conformance** - Scaled inverse matches direct summation
//! 3. **Round Trip** - forward + inverse reproduces the input

use approx::assert_abs_diff_eq;
use rustfft::num_complex::Complex;

use fdsmooth::internals::math::{reference, transform};

// ============================================================================
// Helper Functions
// ============================================================================

/// Deterministic pseudo-contour samples for a given length.
fn samples(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|i| {
            let x = ((i * 7 + 3) % 23) as f64;
            let y = ((i * 13 + 5) % 19) as f64;
            Complex::new(x, y)
        })
        .collect()
}

fn assert_close(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(a.re, e.re, epsilon = 1e-6);
        assert_abs_diff_eq!(a.im, e.im, epsilon = 1e-6);
    }
}

// ============================================================================
// Forward Conformance Tests
// ============================================================================

/// Test that the FFT forward transform matches the direct DFT.
///
/// Verifies conformance for every N up to 32, covering primes and other
/// non-power-of-two lengths.
#[test]
fn test_forward_matches_direct_dft() {
    for n in 1..=32 {
        let input = samples(n);
        let expected = reference::dft(&input);

        let mut actual = input.clone();
        transform::forward(&mut actual);

        assert_close(&actual, &expected);
    }
}

/// Test that bin 0 of the forward transform is the coordinate sum.
///
/// Verifies the DC component definition: the centroid times N.
#[test]
fn test_forward_dc_bin_is_sum() {
    let input = samples(11);
    let (sx, sy) = input
        .iter()
        .fold((0.0, 0.0), |(sx, sy), c| (sx + c.re, sy + c.im));

    let mut bins = input;
    transform::forward(&mut bins);

    assert_abs_diff_eq!(bins[0].re, sx, epsilon = 1e-6);
    assert_abs_diff_eq!(bins[0].im, sy, epsilon = 1e-6);
}

// ============================================================================
// Inverse Conformance Tests
// ============================================================================

/// Test that the scaled inverse transform matches the direct inverse DFT.
#[test]
fn test_inverse_matches_direct_idft() {
    for n in 1..=32 {
        let bins = reference::dft(&samples(n));
        let expected = reference::idft(&bins);

        let mut actual = bins.clone();
        transform::inverse(&mut actual);

        assert_close(&actual, &expected);
    }
}

// ============================================================================
// Round Trip Tests
// ============================================================================

/// Test that forward + scaled inverse reproduces the input.
///
/// Verifies the normalization convention: the inverse divides by N, so
/// an unfiltered round trip is the identity up to floating-point error.
#[test]
fn test_round_trip_is_identity() {
    for n in [1, 2, 3, 5, 8, 13, 17, 27, 32] {
        let input = samples(n);

        let mut buffer = input.clone();
        transform::forward(&mut buffer);
        transform::inverse(&mut buffer);

        assert_close(&buffer, &input);
    }
}

/// Test that both transforms handle the empty buffer.
#[test]
fn test_empty_buffer_is_noop() {
    let mut buffer: Vec<Complex<f64>> = Vec::new();
    transform::forward(&mut buffer);
    transform::inverse(&mut buffer);
    assert!(buffer.is_empty());
}
