//! # fdsmooth — Fourier Descriptor Contour Smoothing for Rust
//!
//! Smooths the boundary of a segmented 2D shape by treating its closed
//! contour as a complex-valued signal, attenuating high-frequency
//! components in the frequency domain, and reconstructing an integer
//! polygon of the same vertex count.
//!
//! ## How it works
//!
//! Each contour vertex (x, y) becomes one complex sample x + iy. A forward
//! DFT turns the N samples into N Fourier descriptors; all but the lowest
//! `retain` descriptors (split between the positive- and negative-frequency
//! ends of the spectrum) are zeroed; the scaled inverse DFT and a final
//! rounding step yield the smoothed contour. Fewer retained descriptors
//! mean a smoother, more elliptical shape; retaining all of them
//! reproduces the input.
//!
//! ## Quick Start
//!
//! ```rust
//! use fdsmooth::prelude::*;
//!
//! let contour: Contour = vec![
//!     Point::new(0, 0),
//!     Point::new(5, 0),
//!     Point::new(10, 0),
//!     Point::new(10, 5),
//!     Point::new(10, 10),
//!     Point::new(5, 10),
//!     Point::new(0, 10),
//!     Point::new(0, 5),
//! ]
//! .into();
//!
//! // Keep 25% of the Fourier descriptors.
//! let smoother = Smoother::new().retain_percentage(25.0).build()?;
//!
//! let output = smoother.smooth(&contour)?;
//! assert_eq!(output.contour.len(), contour.len());
//! println!("{}", output);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Threshold modes
//!
//! The retain threshold is either a percentage of the contour's vertex
//! count (`retain_percentage`) or an absolute descriptor count
//! (`retain_absolute`). Absolute values larger than the vertex count are
//! clamped, never rejected; negative or non-finite values are rejected at
//! `build()` time with [`prelude::SmoothError::InvalidThreshold`].
//!
//! ## Result and Error Handling
//!
//! `smooth` returns `Result<SmoothOutput, SmoothError>`; the `?` operator
//! is idiomatic:
//!
//! ```rust
//! use fdsmooth::prelude::*;
//!
//! let contour: Contour = vec![Point::new(3, 4)].into();
//! let output = Smoother::new().retain_absolute(1.0).build()?.smooth(&contour)?;
//! assert_eq!(output.contour.points()[0], Point::new(3, 4));
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Parallelism
//!
//! Every invocation is a pure function over private buffers, so
//! independent contours (e.g. the shapes found in one image) may be
//! smoothed concurrently. With the `parallel` feature enabled,
//! `smooth_all` distributes contours across threads via rayon.
//!
//! ## References
//!
//! - Zahn, C. T. & Roskies, R. Z. (1972). "Fourier Descriptors for Plane
//!   Closed Curves"
//! - Gonzalez, R. C. & Woods, R. E. "Digital Image Processing", ch. 11

// Layer 1: Primitives - contour types and shared errors.
mod primitives;

// Layer 2: Math - pure frequency-domain functions.
mod math;

// Layer 3: Engine - validation, threshold policy, and the smoothing pipeline.
mod engine;

// High-level fluent API for contour smoothing.
mod api;

// Standard fdsmooth prelude.
pub mod prelude {
    pub use crate::api::{descriptor_range, ContourSmoother, SmootherBuilder as Smoother};
    pub use crate::engine::output::SmoothOutput;
    pub use crate::engine::threshold::ThresholdMode::{self, Absolute, Percentage};
    pub use crate::primitives::contour::{Contour, Point};
    pub use crate::primitives::errors::SmoothError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
