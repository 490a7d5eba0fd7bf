//! Threshold normalization.
//!
//! ## Purpose
//!
//! This module converts a raw user threshold into a retain count: the
//! number of Fourier descriptors the filter preserves. The raw value is
//! either a percentage of the contour's vertex count or an absolute
//! descriptor count.
//!
//! ## Design notes
//!
//! * **Clamping**: An absolute request larger than the vertex count is
//!   silently clamped to N; a threshold can never exceed the available
//!   descriptor count.
//! * **Percentages above 100** are passed through un-clamped; the filter
//!   degrades to the identity for any oversized retain count. Callers
//!   collecting parameters are expected to bound the input at 100.
//! * **No side effects**: Pure arithmetic; negative or non-finite input
//!   is a contract violation screened by the validator beforehand.
//!
//! ## Non-goals
//!
//! * This module does not validate the raw value (see `engine::validator`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Threshold Mode
// ============================================================================

/// Interpretation of the raw retain threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMode {
    /// The raw value is a percentage of the contour's vertex count.
    #[default]
    Percentage,

    /// The raw value is an absolute descriptor count.
    Absolute,
}

// ============================================================================
// Normalization
// ============================================================================

/// Derive the retain count from a raw threshold.
///
/// Percentage mode computes `floor(raw * n / 100)`; absolute mode floors
/// the raw value and clamps it to `n`. `raw` is assumed finite and
/// non-negative.
pub fn normalize<T: Float>(raw: T, mode: ThresholdMode, n: usize) -> usize {
    match mode {
        ThresholdMode::Percentage => {
            let scaled = raw * T::from(n).unwrap() / T::from(100).unwrap();
            scaled.floor().to_usize().unwrap_or(usize::MAX)
        }
        ThresholdMode::Absolute => raw.floor().to_usize().unwrap_or(usize::MAX).min(n),
    }
}
