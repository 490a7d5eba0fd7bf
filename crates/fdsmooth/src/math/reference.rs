//! Direct O(N^2) DFT conformance oracle.
//!
//! ## Purpose
//!
//! This module implements the discrete Fourier transform by direct
//! summation. It exists so the test suite can cross-validate the FFT
//! path against the textbook definition on small inputs; it is compiled
//! only with the `dev` feature and is never part of the production path.
//!
//! ## Non-goals
//!
//! * This module is not an execution backend; nothing in the engine
//!   calls it.

// External dependencies
use num_traits::Float;
use rustfft::num_complex::Complex;

// ============================================================================
// Direct Summation
// ============================================================================

/// Forward DFT by direct summation: bin k = sum_n sample_n * e^(-2*pi*i*k*n/N).
pub fn dft<T: Float>(samples: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = samples.len();
    let tau = T::from(std::f64::consts::TAU).unwrap();

    (0..n)
        .map(|k| {
            let mut acc = Complex::new(T::zero(), T::zero());
            for (j, sample) in samples.iter().enumerate() {
                let angle = -tau * T::from(k * j).unwrap() / T::from(n).unwrap();
                let twiddle = Complex::new(angle.cos(), angle.sin());
                acc = acc + sample * twiddle;
            }
            acc
        })
        .collect()
}

/// Scaled inverse DFT by direct summation (each sample divided by N).
pub fn idft<T: Float>(bins: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = bins.len();
    let tau = T::from(std::f64::consts::TAU).unwrap();
    let scale = T::from(n).unwrap();

    (0..n)
        .map(|k| {
            let mut acc = Complex::new(T::zero(), T::zero());
            for (j, bin) in bins.iter().enumerate() {
                let angle = tau * T::from(k * j).unwrap() / T::from(n).unwrap();
                let twiddle = Complex::new(angle.cos(), angle.sin());
                acc = acc + bin * twiddle;
            }
            Complex::new(acc.re / scale, acc.im / scale)
        })
        .collect()
}
