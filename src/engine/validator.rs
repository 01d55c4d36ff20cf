//! Input validation for sieve configuration and queries.
//!
//! ## Purpose
//!
//! This module provides validation functions for sieve configuration
//! parameters and query inputs. It checks requirements such as index sign,
//! segment width, and bound growth.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Pure**: Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or clamp inputs.
//! * This module does not perform the sieving itself.

// Internal dependencies
use crate::primitives::errors::SieveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sieve configuration and query inputs.
///
/// Provides static methods returning `Result<(), SieveError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a 0-based prime index.
    pub fn validate_index(index: i64) -> Result<(), SieveError> {
        if index < 0 {
            return Err(SieveError::InvalidIndex(index));
        }
        Ok(())
    }

    /// Validate the segment width.
    pub fn validate_segment_size(segment_size: usize) -> Result<(), SieveError> {
        const MIN_SEGMENT_SIZE: usize = 1;
        if segment_size < MIN_SEGMENT_SIZE {
            return Err(SieveError::InvalidSegmentSize {
                got: segment_size,
                min: MIN_SEGMENT_SIZE,
            });
        }
        Ok(())
    }

    /// Validate the bound growth factor used by the rebound retry path.
    ///
    /// A factor of 1 or below would retry without enlarging the search range.
    pub fn validate_growth_factor(factor: f64) -> Result<(), SieveError> {
        if !factor.is_finite() || factor <= 1.0 {
            return Err(SieveError::InvalidGrowthFactor(factor));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SieveError> {
        if let Some(parameter) = duplicate_param {
            return Err(SieveError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
