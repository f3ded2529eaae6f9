//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the sum:
//! - Normalization conventions and their recursion coefficients
//! - Decomposition of points into circle geometry and azimuth
//! - Exact degree-based trigonometry
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exact trigonometry in degrees.
pub mod angle;

/// Circle geometry and azimuth of evaluation points.
pub mod geometry;

/// Legendre normalization conventions.
pub mod normalization;
