#![cfg(feature = "dev")]
//! Tests for the contour primitives.
//!
//! These tests verify the vertex and contour types:
//! - Construction and conversions
//! - Order-sensitive equality
//! - Centroid computation
//!
//! ## Test Organization
//!
//! 1. **Construction** - Conversions from vectors and tuples
//! 2. **Equality** - Order and count sensitivity
//! 3. **Centroid** - Mean coordinates and the empty case

use fdsmooth::internals::primitives::contour::{Contour, Point};

// ============================================================================
// Construction Tests
// ============================================================================

/// Test conversions into a contour.
#[test]
fn test_contour_conversions() {
    let from_points: Contour = vec![Point::new(1, 2), Point::new(3, 4)].into();
    let from_tuples: Contour = vec![(1, 2), (3, 4)].into();
    let collected: Contour = [(1, 2), (3, 4)].iter().map(|&(x, y)| Point::new(x, y)).collect();

    assert_eq!(from_points, from_tuples);
    assert_eq!(from_points, collected);
    assert_eq!(from_points.len(), 2);
    assert!(!from_points.is_empty());
}

/// Test iteration preserves traversal order.
#[test]
fn test_contour_iteration_order() {
    let contour: Contour = vec![(0, 0), (1, 0), (1, 1)].into();
    let xs: Vec<i32> = contour.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0, 1, 1]);
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Test that equality is order-sensitive.
///
/// Two contours with the same vertex set but different traversal order
/// are not equal.
#[test]
fn test_equality_is_order_sensitive() {
    let forward: Contour = vec![(0, 0), (1, 0), (1, 1)].into();
    let rotated: Contour = vec![(1, 0), (1, 1), (0, 0)].into();

    assert_ne!(forward, rotated);
}

/// Test that equality is count-sensitive.
#[test]
fn test_equality_is_count_sensitive() {
    let three: Contour = vec![(0, 0), (1, 0), (1, 1)].into();
    let four: Contour = vec![(0, 0), (1, 0), (1, 1), (0, 0)].into();

    assert_ne!(three, four);
}

// ============================================================================
// Centroid Tests
// ============================================================================

/// Test the centroid of a symmetric contour.
#[test]
fn test_centroid() {
    let contour: Contour = vec![(0, 0), (10, 0), (10, 10), (0, 10)].into();
    assert_eq!(contour.centroid(), Some((5.0, 5.0)));
}

/// Test the centroid with non-integer means.
#[test]
fn test_centroid_fractional() {
    let contour: Contour = vec![(0, 0), (1, 0), (1, 1)].into();
    let (cx, cy) = contour.centroid().unwrap();
    assert!((cx - 2.0 / 3.0).abs() < 1e-12);
    assert!((cy - 1.0 / 3.0).abs() < 1e-12);
}

/// Test that an empty contour has no centroid.
#[test]
fn test_centroid_empty() {
    assert_eq!(Contour::default().centroid(), None);
}
