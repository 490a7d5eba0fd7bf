#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions used by the smoothing
//! engine for:
//! - Contour validation (emptiness)
//! - Threshold validation (sign, finiteness)
//! - Builder hygiene (duplicate parameters)
//!
//! ## Test Organization
//!
//! 1. **Contour Validation** - Empty contour rejection
//! 2. **Threshold Validation** - Negative and non-finite values
//! 3. **Builder Hygiene** - Duplicate parameter reporting

use fdsmooth::internals::engine::validator::Validator;
use fdsmooth::internals::primitives::contour::{Contour, Point};
use fdsmooth::internals::primitives::errors::SmoothError;

// ============================================================================
// Contour Validation Tests
// ============================================================================

/// Test validation rejects an empty contour.
#[test]
fn test_validate_empty_contour() {
    let contour = Contour::default();
    let res = Validator::validate_contour(&contour);

    assert!(
        matches!(res, Err(SmoothError::EmptyContour)),
        "Empty contour should error"
    );
}

/// Test validation accepts a single-vertex contour.
///
/// Degenerate one-point contours are handled by the general algorithm,
/// not rejected.
#[test]
fn test_validate_single_vertex_contour() {
    let contour: Contour = vec![Point::new(0, 0)].into();
    assert!(Validator::validate_contour(&contour).is_ok());
}

// ============================================================================
// Threshold Validation Tests
// ============================================================================

/// Test validation rejects negative thresholds.
///
/// Verifies that negative input surfaces an error instead of being
/// coerced to zero.
#[test]
fn test_validate_negative_threshold() {
    let res = Validator::validate_threshold(-0.5_f64);

    assert!(
        matches!(res, Err(SmoothError::InvalidThreshold(v)) if v == -0.5),
        "Negative threshold should error with the offending value"
    );
}

/// Test validation rejects non-finite thresholds.
#[test]
fn test_validate_non_finite_threshold() {
    for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let res = Validator::validate_threshold(raw);
        assert!(
            matches!(res, Err(SmoothError::InvalidThreshold(_))),
            "{raw} should error"
        );
    }
}

/// Test validation accepts valid thresholds.
#[test]
fn test_validate_valid_threshold() {
    assert!(Validator::validate_threshold(0.0_f64).is_ok());
    assert!(Validator::validate_threshold(100.0_f64).is_ok());
    assert!(Validator::validate_threshold(1e9_f64).is_ok());
}

// ============================================================================
// Builder Hygiene Tests
// ============================================================================

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    let res = Validator::validate_no_duplicates(Some("retain"));
    assert!(matches!(
        res,
        Err(SmoothError::DuplicateParameter {
            parameter: "retain"
        })
    ));
}
