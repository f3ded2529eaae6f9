//! Layer 3: Algorithms
//!
//! This layer implements the Clenshaw summation of the harmonic series, split
//! into a per-circle degree sum and a per-longitude order sum. It is
//! orchestrated by the engine layer.

// Degree and order recursions.
pub mod clenshaw;
