//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure frequency-domain functions of the engine:
//! - Forward and scaled inverse discrete Fourier transforms
//! - Retain-band filtering of Fourier descriptors
//!
//! These are reusable mathematical building blocks with no knowledge of
//! contours, thresholds, or rounding policy.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Forward and scaled inverse DFT.
pub mod transform;

/// Frequency-domain retain-band filter.
pub mod filter;

/// Direct O(N^2) DFT conformance oracle (test-only).
#[cfg(feature = "dev")]
pub mod reference;
