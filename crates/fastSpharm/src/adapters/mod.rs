//! Layer 5: Adapters
//!
//! This layer provides the batch adapter that evaluates a series at many
//! points or on a grid, with optional parallel execution.

/// Parallel batch evaluation.
pub mod batch;
