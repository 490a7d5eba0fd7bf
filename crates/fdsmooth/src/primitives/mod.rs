//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and shared error
//! types used throughout the crate. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Contour and vertex types.
pub mod contour;

/// Shared error types.
pub mod errors;
