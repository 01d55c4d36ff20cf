//! Segment orchestration and execution.
//!
//! ## Purpose
//!
//! This module drives the segmented sieve: it computes the base primes up to
//! the square root of the search bound, partitions the remainder of the range
//! into fixed-width segments, sieves each segment against the shared base
//! primes, and merges the results into one ascending sequence.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Sequential mode streams each segment's primes straight into the output;
//!   parallel mode fans segments out across a rayon worker pool.
//! * Each segment computation owns its candidate map exclusively and reads
//!   the base primes through a shared immutable borrow, so no locking is
//!   needed anywhere.
//!
//! ## Invariants
//!
//! * Output order is determined by segment index, never completion order:
//!   rayon's indexed parallel `collect` reassembles results in input order.
//! * The merged sequence is ascending, duplicate-free, and complete over
//!   `[2, limit]`.
//! * The base-prime sequence is immutable for the duration of all segment
//!   computations.
//!
//! ## Non-goals
//!
//! * This module does not estimate bounds (see `math::bound`).
//! * This module does not validate configuration (see `validator`).
//! * This module does not convert primes to the caller's integer type
//!   (handled by the API layer).

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::eratosthenes::simple_sieve;
use crate::algorithms::segmented::sieve_segment;
use crate::math::bound::integer_sqrt;
use crate::primitives::execution::ExecutionMode;
use crate::primitives::segments::{Segment, Segments};

/// Default segment width. Large enough to amortize base-prime iteration
/// overhead per segment, small enough to keep each candidate map in cache.
pub const DEFAULT_SEGMENT_SIZE: usize = 131_072;

/// Default number of rebound attempts after an insufficient bound.
pub const DEFAULT_MAX_REBOUNDS: usize = 2;

/// Default bound growth factor for the rebound retry path.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sieve execution.
#[derive(Debug, Clone)]
pub struct SieveConfig {
    /// Segment width for the windowed sieve.
    pub segment_size: usize,

    /// Scheduling mode for segment processing.
    pub execution: ExecutionMode,

    /// Rebound attempts allowed when the estimated bound is insufficient.
    pub max_rebounds: usize,

    /// Multiplier applied to the bound on each rebound.
    pub growth_factor: f64,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            execution: ExecutionMode::Sequential,
            max_rebounds: DEFAULT_MAX_REBOUNDS,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Output from one full sieve pass.
#[derive(Debug, Clone)]
pub struct ExecutorOutput {
    /// Every prime in `[2, limit]`, ascending.
    pub primes: Vec<usize>,

    /// Number of base primes (primes up to the square root of the limit).
    pub base_count: usize,

    /// Number of segments sieved above the base range.
    pub segment_count: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrator for the segmented sieve.
#[derive(Debug, Clone)]
pub struct SieveExecutor {
    /// Segment width for the windowed sieve.
    pub segment_size: usize,

    /// Scheduling mode for segment processing.
    pub execution: ExecutionMode,
}

impl Default for SieveExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SieveExecutor {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            execution: ExecutionMode::Sequential,
        }
    }

    /// Create a new executor from a [`SieveConfig`].
    pub fn from_config(config: &SieveConfig) -> Self {
        Self::new()
            .segment_size(config.segment_size)
            .execution(config.execution)
    }

    /// Set the segment width.
    pub fn segment_size(mut self, segment_size: usize) -> Self {
        self.segment_size = segment_size;
        self
    }

    /// Set the scheduling mode.
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Collect every prime in `[2, limit]`, ascending.
    ///
    /// The base sieve covers `[2, integer_sqrt(limit)]`; the rest of the
    /// range is tiled into segments of the configured width and sieved
    /// against the shared base primes.
    pub fn collect_primes(&self, limit: u64) -> ExecutorOutput {
        let limit = limit as usize;
        let base_limit = integer_sqrt(limit as u64) as usize;

        let base_primes = simple_sieve(base_limit);
        let base_count = base_primes.len();

        let segments: Vec<Segment> =
            Segments::new(base_limit + 1, limit, self.segment_size).collect();
        let segment_count = segments.len();

        let segment_primes = match self.execution {
            ExecutionMode::Sequential => {
                Self::sieve_segments_sequential(&segments, &base_primes)
            }
            ExecutionMode::Parallel => Self::sieve_segments_parallel(&segments, &base_primes),
        };

        // Base primes first, then segment primes in ascending segment order;
        // the whole sequence stays ascending.
        let mut primes = base_primes;
        primes.reserve(segment_primes.len());
        primes.extend(segment_primes);

        ExecutorOutput {
            primes,
            base_count,
            segment_count,
        }
    }

    // ========================================================================
    // Scheduling
    // ========================================================================

    /// Sieve segments one at a time, streaming results into one sequence.
    fn sieve_segments_sequential(segments: &[Segment], base_primes: &[usize]) -> Vec<usize> {
        let mut primes = Vec::new();
        for segment in segments {
            primes.extend(sieve_segment(segment.low, segment.high, base_primes));
        }
        primes
    }

    /// Sieve segments across the rayon worker pool, rejoining in segment
    /// order regardless of completion order.
    #[cfg(feature = "parallel")]
    fn sieve_segments_parallel(segments: &[Segment], base_primes: &[usize]) -> Vec<usize> {
        let per_segment: Vec<Vec<usize>> = segments
            .par_iter()
            .map(|segment| sieve_segment(segment.low, segment.high, base_primes))
            .collect();

        let total = per_segment.iter().map(Vec::len).sum();
        let mut primes = Vec::with_capacity(total);
        for segment_primes in per_segment {
            primes.extend(segment_primes);
        }
        primes
    }

    /// Without the `parallel` feature there is no worker pool to fan out to;
    /// degrade to the sequential schedule.
    #[cfg(not(feature = "parallel"))]
    fn sieve_segments_parallel(segments: &[Segment], base_primes: &[usize]) -> Vec<usize> {
        Self::sieve_segments_sequential(segments, base_primes)
    }
}
