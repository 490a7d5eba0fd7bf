//! High-level API for Fourier descriptor contour smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It
//! implements a fluent builder for configuring the retain threshold and
//! rendering hint, validated once at `build()` time, producing a
//! [`ContourSmoother`] whose `smooth`/`smooth_all` calls are pure
//! functions.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (keep 100% of
//!   the descriptors, i.e. the identity filter).
//! * **Validated**: Threshold finiteness/sign and builder hygiene are
//!   checked during `build()`; per-call validation covers only the
//!   contour itself.
//! * **Type-Safe**: Generic over `Float` working types for flexible
//!   precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] (exported as `Smoother` in the
//!    prelude) via `Smoother::new()`.
//! 2. Chain `.retain_percentage()` or `.retain_absolute()`, optionally
//!    `.outline_only()`.
//! 3. Call `.build()` to obtain a validated [`ContourSmoother`].

// External dependencies
use num_traits::Float;
use rustfft::FftNum;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::engine::executor::smooth_contour;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::SmoothOutput;
pub use crate::engine::threshold::ThresholdMode;
pub use crate::primitives::contour::{Contour, Point};
pub use crate::primitives::errors::SmoothError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a contour smoother.
#[derive(Debug, Clone)]
pub struct SmootherBuilder<T> {
    /// Raw retain threshold (percentage or absolute count).
    pub retain_value: Option<T>,

    /// Interpretation of the retain threshold.
    pub mode: Option<ThresholdMode>,

    /// Rendering hint: draw only the outline instead of filling the
    /// polygon. Not consumed by the transform; carried for rasterizing
    /// callers.
    pub outline_only: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + FftNum> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FftNum> SmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            retain_value: None,
            mode: None,
            outline_only: None,
            duplicate_param: None,
        }
    }

    /// Keep the given percentage of each contour's Fourier descriptors.
    pub fn retain_percentage(mut self, percent: T) -> Self {
        if self.retain_value.is_some() {
            self.duplicate_param = Some("retain");
        }
        self.retain_value = Some(percent);
        self.mode = Some(ThresholdMode::Percentage);
        self
    }

    /// Keep the given absolute number of Fourier descriptors.
    ///
    /// Values above a contour's vertex count are clamped per contour,
    /// never rejected.
    pub fn retain_absolute(mut self, count: T) -> Self {
        if self.retain_value.is_some() {
            self.duplicate_param = Some("retain");
        }
        self.retain_value = Some(count);
        self.mode = Some(ThresholdMode::Absolute);
        self
    }

    /// Set the outline-only rendering hint.
    pub fn outline_only(mut self, enabled: bool) -> Self {
        if self.outline_only.is_some() {
            self.duplicate_param = Some("outline_only");
        }
        self.outline_only = Some(enabled);
        self
    }

    /// Build the smoother, validating the configuration once.
    pub fn build(self) -> Result<ContourSmoother<T>, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Default: keep everything (identity filter).
        let threshold = self.retain_value.unwrap_or_else(|| T::from(100).unwrap());
        let mode = self.mode.unwrap_or_default();

        Validator::validate_threshold(threshold)?;

        Ok(ContourSmoother {
            threshold,
            mode,
            outline_only: self.outline_only.unwrap_or(false),
        })
    }
}

// ============================================================================
// Contour Smoother
// ============================================================================

/// Validated contour smoothing engine.
///
/// Holds only configuration; every `smooth` call is a pure function over
/// its own private buffers, so one smoother may serve many threads.
#[derive(Debug, Clone)]
pub struct ContourSmoother<T> {
    threshold: T,
    mode: ThresholdMode,
    outline_only: bool,
}

impl<T: Float + FftNum> ContourSmoother<T> {
    /// Smooth one closed contour.
    pub fn smooth(&self, contour: &Contour) -> Result<SmoothOutput, SmoothError> {
        smooth_contour(contour, self.threshold, self.mode)
    }

    /// Smooth several independent contours (e.g. all shapes found in one
    /// image). Each contour is processed with no shared state; with the
    /// `parallel` feature the work is distributed across threads.
    pub fn smooth_all(&self, contours: &[Contour]) -> Result<Vec<SmoothOutput>, SmoothError> {
        #[cfg(feature = "parallel")]
        {
            contours.par_iter().map(|c| self.smooth(c)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            contours.iter().map(|c| self.smooth(c)).collect()
        }
    }

    /// The rendering hint configured at build time: outline the smoothed
    /// polygon instead of filling it. The transform itself ignores this.
    pub fn outline_only(&self) -> bool {
        self.outline_only
    }
}

// ============================================================================
// Descriptor Bookkeeping
// ============================================================================

/// Minimum and maximum descriptor counts over a set of contours.
///
/// Parameter-collection UIs use this to bound an absolute-threshold
/// slider. Returns `None` when `contours` is empty.
pub fn descriptor_range(contours: &[Contour]) -> Option<(usize, usize)> {
    contours
        .iter()
        .map(Contour::len)
        .fold(None, |acc, n| match acc {
            None => Some((n, n)),
            Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
        })
}
