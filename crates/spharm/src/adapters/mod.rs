//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the user-facing series objects that adapt the engine
//! layer to the two kinds of model:
//!
//! - **Single**: One coefficient set
//! - **Corrected**: A primary set plus a `tau`-weighted correction set
//!
//! and the circle evaluator both of them produce.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-set series.
pub mod series;

/// Series with a correction set.
pub mod corrected;

/// Circle-of-latitude evaluator.
pub mod circle;
