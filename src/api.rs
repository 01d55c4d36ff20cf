//! High-level API for n-th prime computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring the segmented sieve (segment width,
//! execution mode, rebound policy) and the built [`SegmentedSieve`] that
//! answers queries.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `build()` is called;
//!   duplicate configuration is rejected.
//! * **Type-Safe**: Query methods are generic over unsigned integer prime
//!   types, with an explicit capacity check against the search bound.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Sieve::new()` → chained setters → `.build()`.
//! * **Rebound policy**: If a sieve pass yields fewer than `n + 1` primes,
//!   the bound is grown by `growth_factor` and the pipeline retried, at most
//!   `max_rebounds` times. The estimate undershoots for a handful of small
//!   indices, where a single rebound recovers; beyond those the retry is a
//!   safety net against rounding at extreme indices.
//! * **Capacity**: A query for type `T` fails with `BoundOverflow` when the
//!   estimated bound exceeds `T::max_value()`, even if the prime itself might
//!   still fit; the check is intentionally conservative and happens before
//!   any sieving work.

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::engine::executor::{SieveConfig, SieveExecutor};
use crate::engine::validator::Validator;
use crate::math::bound::{grow_bound, upper_bound};

// Publicly re-exported types
pub use crate::engine::output::NthPrimeResult;
pub use crate::primitives::errors::SieveError;
pub use crate::primitives::execution::ExecutionMode;

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Compute the n-th prime (0-indexed) with default configuration.
///
/// `nth_prime(0)` is 2, `nth_prime(1)` is 3, and so on.
pub fn nth_prime(index: i64) -> Result<u64, SieveError> {
    SieveBuilder::new().build()?.nth(index)
}

// ============================================================================
// Sieve Capability
// ============================================================================

/// Capability of answering n-th prime queries.
///
/// Object-safe seam for callers that want to swap sieve implementations;
/// the crate's [`SegmentedSieve`] is the canonical one.
pub trait PrimeSieve {
    /// Compute the n-th prime (0-indexed).
    fn nth_prime(&self, index: i64) -> Result<u64, SieveError>;
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`SegmentedSieve`].
#[derive(Debug, Clone)]
pub struct SieveBuilder {
    /// Segment width for the windowed sieve.
    pub segment_size: Option<usize>,

    /// Scheduling mode for segment processing.
    pub execution: Option<ExecutionMode>,

    /// Rebound attempts allowed when the estimated bound is insufficient.
    pub max_rebounds: Option<usize>,

    /// Multiplier applied to the bound on each rebound.
    pub growth_factor: Option<f64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for SieveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SieveBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            segment_size: None,
            execution: None,
            max_rebounds: None,
            growth_factor: None,
            duplicate_param: None,
        }
    }

    /// Set the segment width.
    pub fn segment_size(mut self, segment_size: usize) -> Self {
        if self.segment_size.is_some() {
            self.duplicate_param = Some("segment_size");
        }
        self.segment_size = Some(segment_size);
        self
    }

    /// Set the scheduling mode for segment processing.
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        if self.execution.is_some() {
            self.duplicate_param = Some("execution");
        }
        self.execution = Some(execution);
        self
    }

    /// Set the number of rebound attempts allowed when the estimated bound
    /// turns out to be insufficient.
    pub fn max_rebounds(mut self, max_rebounds: usize) -> Self {
        if self.max_rebounds.is_some() {
            self.duplicate_param = Some("max_rebounds");
        }
        self.max_rebounds = Some(max_rebounds);
        self
    }

    /// Set the bound growth factor for the rebound retry path.
    pub fn growth_factor(mut self, growth_factor: f64) -> Self {
        if self.growth_factor.is_some() {
            self.duplicate_param = Some("growth_factor");
        }
        self.growth_factor = Some(growth_factor);
        self
    }

    /// Validate the configuration and build the sieve.
    pub fn build(self) -> Result<SegmentedSieve, SieveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = SieveConfig::default();

        if let Some(segment_size) = self.segment_size {
            Validator::validate_segment_size(segment_size)?;
            config.segment_size = segment_size;
        }
        if let Some(execution) = self.execution {
            config.execution = execution;
        }
        if let Some(max_rebounds) = self.max_rebounds {
            config.max_rebounds = max_rebounds;
        }
        if let Some(growth_factor) = self.growth_factor {
            Validator::validate_growth_factor(growth_factor)?;
            config.growth_factor = growth_factor;
        }

        Ok(SegmentedSieve { config })
    }
}

// ============================================================================
// Segmented Sieve
// ============================================================================

/// Configured n-th prime sieve.
pub struct SegmentedSieve {
    config: SieveConfig,
}

impl SegmentedSieve {
    /// The configuration this sieve was built with.
    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Compute the n-th prime (0-indexed).
    pub fn nth<T>(&self, index: i64) -> Result<T, SieveError>
    where
        T: PrimInt + Unsigned,
    {
        self.nth_report(index).map(|report| report.prime)
    }

    /// Compute the n-th prime, returning the full report with bound and
    /// orchestration metadata.
    pub fn nth_report<T>(&self, index: i64) -> Result<NthPrimeResult<T>, SieveError>
    where
        T: PrimInt + Unsigned,
    {
        Validator::validate_index(index)?;
        self.nth_report_from(index, upper_bound(index as usize))
    }

    /// Run the query pipeline from an explicit initial bound.
    ///
    /// Exists so the rebound path can be exercised deterministically; the
    /// public entry points always start from the estimated bound.
    #[doc(hidden)]
    pub fn nth_report_from<T>(
        &self,
        index: i64,
        initial_bound: u64,
    ) -> Result<NthPrimeResult<T>, SieveError>
    where
        T: PrimInt + Unsigned,
    {
        Validator::validate_index(index)?;
        let n = index as usize;

        let executor = SieveExecutor::from_config(&self.config);
        let mut bound = initial_bound;
        let mut rebounds = 0usize;

        loop {
            Self::ensure_capacity::<T>(bound)?;
            let output = executor.collect_primes(bound);

            if output.primes.len() > n {
                // Capacity was checked against the bound, and no sieved
                // prime exceeds it.
                let prime = T::from(output.primes[n]).unwrap();
                return Ok(NthPrimeResult {
                    prime,
                    index,
                    bound,
                    primes_found: output.primes.len(),
                    base_primes: output.base_count,
                    segments: output.segment_count,
                    rebounds,
                    execution: self.config.execution,
                });
            }

            if rebounds >= self.config.max_rebounds {
                return Err(SieveError::BoundExhausted {
                    index,
                    bound,
                    primes_found: output.primes.len(),
                    attempts: rebounds + 1,
                });
            }

            bound = grow_bound(bound, self.config.growth_factor);
            rebounds += 1;
        }
    }

    /// Collect every prime in `[2, limit]`, ascending.
    pub fn primes_up_to(&self, limit: u64) -> Vec<u64> {
        let output = SieveExecutor::from_config(&self.config).collect_primes(limit);
        output.primes.into_iter().map(|p| p as u64).collect()
    }

    /// Reject prime types that cannot represent the search bound.
    fn ensure_capacity<T>(bound: u64) -> Result<(), SieveError>
    where
        T: PrimInt + Unsigned,
    {
        if T::from(bound).is_none() {
            return Err(SieveError::BoundOverflow {
                bound,
                capacity: T::max_value().to_u64().unwrap_or(u64::MAX),
            });
        }
        Ok(())
    }
}

impl PrimeSieve for SegmentedSieve {
    fn nth_prime(&self, index: i64) -> Result<u64, SieveError> {
        self.nth(index)
    }
}
