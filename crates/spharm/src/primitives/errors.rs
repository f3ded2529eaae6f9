//! Error types for spherical-harmonic series construction.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! series object or a circle evaluator: truncation ordering violations,
//! undersized coefficient arrays, invalid builder usage, and allocation
//! failure of the per-order circle state.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (degrees, lengths).
//! * **Construction-only**: Point evaluation never fails. The only
//!   call-time variants describe malformed batch inputs of extension crates.
//! * **No-std**: Implements `Display` everywhere and `std::error::Error` when
//!   the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * A constructor that returns an error has produced no object at all.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for spherical-harmonic series construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SpharmError {
    /// The primary truncation violates `N >= nmx >= mmx >= -1`.
    InvalidTruncation {
        /// Layout degree `N`.
        degree: i32,
        /// Maximum degree summed, `nmx`.
        max_degree: i32,
        /// Maximum order summed, `mmx`.
        max_order: i32,
    },

    /// The correction truncation violates `N1 >= nmx1 >= mmx1 >= -1` or
    /// exceeds the primary truncation in one of its components.
    InvalidCorrectionTruncation {
        /// Correction layout degree `N1`.
        degree: i32,
        /// Correction maximum degree, `nmx1`.
        max_degree: i32,
        /// Correction maximum order, `mmx1`.
        max_order: i32,
        /// Which constraint failed.
        reason: &'static str,
    },

    /// A coefficient array is shorter than its declared layout requires.
    CoefficientsTooShort {
        /// Name of the array (`"C"`, `"S"`, `"C'"`, `"S'"`).
        name: &'static str,
        /// Actual length.
        got: usize,
        /// Required length, `(N + 1)(N + 2) / 2`.
        min: usize,
    },

    /// The builder was asked to build without coefficient arrays.
    MissingCoefficients {
        /// Which set is missing (`"primary"` or `"correction"`).
        set: &'static str,
    },

    /// The reference radius must be positive and finite.
    InvalidReferenceRadius(f64),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Coordinate arrays of a batch evaluation differ in length.
    MismatchedInputs {
        /// Length of the first (`x`) array.
        expected: usize,
        /// Length of the offending array.
        got: usize,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Single").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The per-order storage of a circle evaluator could not be obtained.
    Allocation {
        /// Number of elements that were requested.
        requested: usize,
    },
}

impl SpharmError {
    /// Whether this error is a configuration error (as opposed to an
    /// allocation failure).
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Allocation { .. })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SpharmError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidTruncation {
                degree,
                max_degree,
                max_order,
            } => write!(
                f,
                "Invalid truncation: N={degree}, nmx={max_degree}, mmx={max_order} (must satisfy N >= nmx >= mmx >= -1)"
            ),
            Self::InvalidCorrectionTruncation {
                degree,
                max_degree,
                max_order,
                reason,
            } => write!(
                f,
                "Invalid correction truncation: N1={degree}, nmx1={max_degree}, mmx1={max_order} ({reason})"
            ),
            Self::CoefficientsTooShort { name, got, min } => {
                write!(
                    f,
                    "Coefficient array {name} too short: got {got}, need at least {min}"
                )
            }
            Self::MissingCoefficients { set } => {
                write!(f, "Missing {set} coefficient arrays")
            }
            Self::InvalidReferenceRadius(a) => {
                write!(f, "Invalid reference radius: {a} (must be > 0 and finite)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedInputs { expected, got } => {
                write!(
                    f,
                    "Length mismatch: coordinate arrays have {expected} and {got} points"
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Allocation { requested } => {
                write!(
                    f,
                    "Allocation failed: could not reserve {requested} elements for circle state"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SpharmError {}
