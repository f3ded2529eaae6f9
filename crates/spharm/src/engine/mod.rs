//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the evaluation by coordinating the primitives
//! (accumulator, coefficient views) and the algorithms (degree and order
//! recursions). It validates series parameters and defines the output type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Point and circle execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
