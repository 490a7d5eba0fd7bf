//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for the smoothing engine's
//! inputs: the contour itself, the raw threshold, and builder hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Threshold validation is generic over `Float` types.
//! * **No coercion**: Negative thresholds are rejected, never clamped to
//!   zero; clamping applies only to absolute values above the vertex
//!   count, which is a documented non-error.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not normalize thresholds (see `engine::threshold`).
//! * This module does not perform the smoothing itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::contour::Contour;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
///
/// Provides static methods returning `Result<(), SmoothError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a contour for smoothing.
    pub fn validate_contour(contour: &Contour) -> Result<(), SmoothError> {
        if contour.is_empty() {
            return Err(SmoothError::EmptyContour);
        }
        Ok(())
    }

    /// Validate the raw retain threshold.
    pub fn validate_threshold<T: Float>(raw: T) -> Result<(), SmoothError> {
        if !raw.is_finite() || raw < T::zero() {
            return Err(SmoothError::InvalidThreshold(
                raw.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
