//! Contour and vertex types.
//!
//! ## Purpose
//!
//! This module defines the integer vertex and closed-contour types that
//! the smoothing engine consumes and produces. A contour is an ordered
//! sequence of vertices in traversal order, as emitted by an external
//! contour tracer.
//!
//! ## Design notes
//!
//! * **Order-sensitive**: Two contours are equal only when vertex order
//!   and count match (derived `PartialEq`).
//! * **Transient**: Contours are created and consumed within a single
//!   engine invocation; nothing here persists or mutates shared state.
//!
//! ## Invariants
//!
//! * The vertex sequence is never reordered by this crate; the smoothed
//!   contour preserves the input traversal order.
//!
//! ## Non-goals
//!
//! * This module does not trace contours from raster images.
//! * This module does not rasterize polygons.

// ============================================================================
// Point
// ============================================================================

/// An integer 2D vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,

    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new vertex.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Contour
// ============================================================================

/// An ordered, closed sequence of integer vertices.
///
/// The closing edge from the last vertex back to the first is implicit;
/// the last vertex is not repeated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Create a contour from a vertex sequence in traversal order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the contour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vertex sequence in traversal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the vertices in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Arithmetic mean of the vertex coordinates (mean x, mean y).
    ///
    /// This equals the contour's DC Fourier descriptor divided by the
    /// vertex count. Returns `None` for an empty contour.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
        Some((sx / n, sy / n))
    }
}

impl From<Vec<Point>> for Contour {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<(i32, i32)>> for Contour {
    fn from(points: Vec<(i32, i32)>) -> Self {
        points.into_iter().map(Point::from).collect()
    }
}

impl FromIterator<Point> for Contour {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Contour {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
