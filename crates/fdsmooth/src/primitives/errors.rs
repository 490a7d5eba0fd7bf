//! Error types for contour smoothing operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during Fourier
//! descriptor smoothing, covering input validation and builder
//! configuration hygiene.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value where one exists.
//! * **Deferred**: Builder misconfiguration is caught at `build()` time.
//! * **Total**: Everything past validation is a total computation; there
//!   are no retryable failure modes.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: A contour must have at least one vertex.
//! 2. **Parameter validation**: Thresholds must be finite and non-negative.
//! 3. **Builder hygiene**: Each parameter may be configured once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Fourier descriptor smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// The contour has zero vertices; no transform is attempted.
    EmptyContour,

    /// The raw threshold is negative or not a finite number.
    ///
    /// Negative input is never silently coerced. Absolute thresholds
    /// larger than the vertex count are clamped, not rejected.
    InvalidThreshold(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyContour => write!(f, "Contour has no vertices"),
            Self::InvalidThreshold(value) => {
                write!(
                    f,
                    "Invalid threshold: {value} (must be finite and >= 0)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SmoothError {}
