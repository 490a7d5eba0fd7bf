//! End-to-end smoothing pipeline.
//!
//! ## Purpose
//!
//! This module runs one smoothing invocation: validate, normalize the
//! threshold, marshal vertices into complex samples, transform, filter,
//! inverse-transform, and round back to integer vertices.
//!
//! ## Design notes
//!
//! * **Pure**: Identical inputs yield identical outputs; no I/O, no state
//!   held between calls. Independent contours may be smoothed
//!   concurrently without coordination.
//! * **One point, one sample**: Each vertex (x, y) becomes the complex
//!   sample x + iy; the transform operates on points, not coordinates.
//! * **Rounding**: Coordinates round to the nearest integer with ties
//!   resolved upward (`floor(v + 0.5)`), so implementations are
//!   bit-reproducible against each other.
//!
//! ## Invariants
//!
//! * The output vertex count always equals the input vertex count.
//! * Traversal order is preserved.
//!
//! ## Non-goals
//!
//! * This module does not rasterize the smoothed contour.
//! * This module does not collect or bound user parameters.

// External dependencies
use num_traits::Float;
use rustfft::{num_complex::Complex, FftNum};

// Internal dependencies
use crate::engine::output::SmoothOutput;
use crate::engine::threshold::{self, ThresholdMode};
use crate::engine::validator::Validator;
use crate::math::{filter, transform};
use crate::primitives::contour::{Contour, Point};
use crate::primitives::errors::SmoothError;

// ============================================================================
// Pipeline
// ============================================================================

/// Smooth one closed contour.
///
/// Fails with [`SmoothError::EmptyContour`] on a zero-vertex contour and
/// [`SmoothError::InvalidThreshold`] on a negative or non-finite raw
/// threshold. A single-point contour reconstructs to itself whenever at
/// least one descriptor is retained.
pub fn smooth_contour<T>(
    contour: &Contour,
    raw_threshold: T,
    mode: ThresholdMode,
) -> Result<SmoothOutput, SmoothError>
where
    T: Float + FftNum,
{
    Validator::validate_contour(contour)?;
    Validator::validate_threshold(raw_threshold)?;

    let n = contour.len();
    let retain = threshold::normalize(raw_threshold, mode, n);

    let mut bins = to_samples::<T>(contour);
    transform::forward(&mut bins);
    filter::retain_band(&mut bins, retain);
    transform::inverse(&mut bins);

    Ok(SmoothOutput {
        contour: to_contour(&bins),
        descriptors: n,
        retained: retain.min(n),
    })
}

// ============================================================================
// Marshalling
// ============================================================================

/// Reinterpret each vertex as one complex sample (re = x, im = y).
fn to_samples<T: Float>(contour: &Contour) -> Vec<Complex<T>> {
    contour
        .iter()
        .map(|p| Complex::new(T::from(p.x).unwrap(), T::from(p.y).unwrap()))
        .collect()
}

/// Round reconstructed samples back to integer vertices.
fn to_contour<T: Float>(samples: &[Complex<T>]) -> Contour {
    samples
        .iter()
        .map(|s| Point::new(round_half_up(s.re), round_half_up(s.im)))
        .collect()
}

/// Round to the nearest integer, ties upward.
fn round_half_up<T: Float>(value: T) -> i32 {
    let rounded = (value + T::from(0.5).unwrap()).floor();
    rounded.to_i32().unwrap_or_else(|| {
        if rounded < T::zero() {
            i32::MIN
        } else {
            i32::MAX
        }
    })
}
