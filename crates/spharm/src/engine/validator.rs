//! Validation of truncations, coefficient arrays and series parameters.
//!
//! ## Purpose
//!
//! This module checks everything a series constructor needs before it may
//! keep a view of the caller's arrays: truncation ordering, array lengths,
//! the correction truncation against the primary one, and the reference
//! radius.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Order**: Truncation first, then lengths, so a bad truncation never
//!   produces a misleading length error.
//!
//! ## Invariants
//!
//! * A validated primary set satisfies `N >= nmx >= mmx >= -1` and holds
//!   `(N + 1)(N + 2) / 2` entries in both arrays.
//! * A validated correction set additionally satisfies `N1 <= N`,
//!   `nmx1 <= nmx`, `mmx1 <= mmx`.
//!
//! ## Non-goals
//!
//! * This module does not inspect coefficient values (NaN is summed as is).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::coefficients::Truncation;
use crate::primitives::errors::SpharmError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for series construction.
///
/// All methods return `Result<(), SpharmError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Truncation Validation
    // ========================================================================

    /// Validate `N >= nmx >= mmx >= -1` for the primary coefficients.
    pub fn validate_truncation(truncation: &Truncation) -> Result<(), SpharmError> {
        if !truncation.is_ordered() {
            return Err(SpharmError::InvalidTruncation {
                degree: truncation.degree,
                max_degree: truncation.max_degree,
                max_order: truncation.max_order,
            });
        }
        Ok(())
    }

    /// Validate the correction truncation on its own and against the primary.
    pub fn validate_correction(
        primary: &Truncation,
        correction: &Truncation,
    ) -> Result<(), SpharmError> {
        let fail = |reason| SpharmError::InvalidCorrectionTruncation {
            degree: correction.degree,
            max_degree: correction.max_degree,
            max_order: correction.max_order,
            reason,
        };

        if !correction.is_ordered() {
            return Err(fail("must satisfy N1 >= nmx1 >= mmx1 >= -1"));
        }
        if correction.degree > primary.degree {
            return Err(fail("N1 exceeds N"));
        }
        if correction.max_degree > primary.max_degree {
            return Err(fail("nmx1 exceeds nmx"));
        }
        if correction.max_order > primary.max_order {
            return Err(fail("mmx1 exceeds mmx"));
        }
        Ok(())
    }

    // ========================================================================
    // Array Validation
    // ========================================================================

    /// Validate that both arrays of a set cover the layout degree.
    pub fn validate_coefficients<T>(
        c: &[T],
        s: &[T],
        truncation: &Truncation,
        names: (&'static str, &'static str),
    ) -> Result<(), SpharmError> {
        let min = truncation.required_len();
        if c.len() < min {
            return Err(SpharmError::CoefficientsTooShort {
                name: names.0,
                got: c.len(),
                min,
            });
        }
        if s.len() < min {
            return Err(SpharmError::CoefficientsTooShort {
                name: names.1,
                got: s.len(),
                min,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the reference radius: positive and finite.
    pub fn validate_reference_radius<T: Float>(a: T) -> Result<(), SpharmError> {
        if !a.is_finite() || a <= T::zero() {
            return Err(SpharmError::InvalidReferenceRadius(
                a.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SpharmError> {
        if let Some(param) = duplicate_param {
            return Err(SpharmError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
