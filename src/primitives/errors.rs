//! Error types for sieve operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while computing the
//! n-th prime, including input validation, builder configuration, and bound
//! estimation failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the rejected index
//!   or the exhausted bound).
//! * **Deferred**: Builder configuration errors are caught and stored during
//!   configuration and surfaced by `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Negative prime indices.
//! 2. **Parameter validation**: Invalid segment size or growth factor.
//! 3. **Bound failures**: Estimated bound too large for the requested prime
//!    type, or still insufficient after every rebound attempt.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sieve operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SieveError {
    /// Prime indices are 0-based and must be non-negative.
    InvalidIndex(i64),

    /// Segment width must be large enough to make progress through the range.
    InvalidSegmentSize {
        /// The segment size provided.
        got: usize,
        /// Minimum required segment size.
        min: usize,
    },

    /// Bound growth factor must be finite and strictly greater than 1.
    InvalidGrowthFactor(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The estimated search bound does not fit in the requested prime type.
    BoundOverflow {
        /// The estimated bound.
        bound: u64,
        /// Maximum value representable by the requested prime type.
        capacity: u64,
    },

    /// The search bound produced too few primes after every rebound attempt.
    BoundExhausted {
        /// The requested 0-based prime index.
        index: i64,
        /// The final bound tried.
        bound: u64,
        /// Number of primes found below the final bound.
        primes_found: usize,
        /// Total sieve attempts performed (initial pass plus rebounds).
        attempts: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SieveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidIndex(n) => {
                write!(f, "Invalid prime index: {n} (must be non-negative)")
            }
            Self::InvalidSegmentSize { got, min } => {
                write!(f, "Invalid segment_size: {got} (must be at least {min})")
            }
            Self::InvalidGrowthFactor(factor) => {
                write!(
                    f,
                    "Invalid growth_factor: {factor} (must be finite and > 1)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::BoundOverflow { bound, capacity } => {
                write!(
                    f,
                    "Search bound {bound} exceeds the prime type capacity {capacity}"
                )
            }
            Self::BoundExhausted {
                index,
                bound,
                primes_found,
                attempts,
            } => {
                write!(
                    f,
                    "Bound {bound} produced {primes_found} primes, fewer than the {} required for index {index} ({attempts} attempts)",
                    index + 1
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SieveError {}
