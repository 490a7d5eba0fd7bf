//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a smoothing invocation: it validates inputs,
//! normalizes the retain threshold, marshals vertices through the
//! frequency-domain math, and packages the reconstructed contour.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Threshold normalization (percentage/absolute retain policy).
pub mod threshold;

/// Input and parameter validation.
pub mod validator;

/// End-to-end smoothing pipeline.
pub mod executor;

/// Output types.
pub mod output;
