//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for batch evaluation.
//! It distributes points and circles across CPU cores.

// Parallel and sequential batch execution
pub mod executor;
