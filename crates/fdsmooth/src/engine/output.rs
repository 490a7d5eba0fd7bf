//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the `SmoothOutput` struct returned by a smoothing
//! invocation: the reconstructed contour plus descriptor bookkeeping a
//! caller may want to surface (e.g. in a parameter dialog).
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `contour.len() == descriptors` (the transform never changes N).
//! * `retained <= descriptors`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::contour::Contour;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of one smoothing invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothOutput {
    /// The reconstructed contour, same vertex count and traversal order
    /// as the input.
    pub contour: Contour,

    /// Total number of Fourier descriptors (the contour's vertex count).
    pub descriptors: usize,

    /// Number of descriptors that survived the filter.
    pub retained: usize,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Vertices:    {}", self.contour.len())?;
        writeln!(f, "  Descriptors: {}", self.descriptors)?;
        writeln!(f, "  Retained:    {}", self.retained)?;

        writeln!(f, "Smoothed Contour:")?;
        writeln!(f, "         X        Y")?;
        writeln!(f, "  -----------------")?;
        for point in self.contour.iter() {
            writeln!(f, "  {:>8} {:>8}", point.x, point.y)?;
        }

        Ok(())
    }
}
