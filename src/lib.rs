//! # nthprime — N-th Prime Computation for Rust
//!
//! Fast, exact n-th prime computation via a bounded, segmented Sieve of
//! Eratosthenes, with optional parallel segment processing.
//!
//! ## How it works
//!
//! Given a 0-based index n, the crate estimates an upper bound L for the
//! n-th prime (from the prime number theorem; grown and retried in the rare
//! case the estimate falls short), sieves the base
//! primes up to √L with the classic Sieve of Eratosthenes, then strikes
//! composites out of `[√L + 1, L]` in fixed-width segments so memory stays
//! proportional to the segment width instead of L. The n-th prime is read
//! out of the merged ascending sequence. Segments are independent units of
//! work and can be fanned out across a worker pool.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! // Build the sieve
//! let sieve = Sieve::new().build()?;
//!
//! // 0-based: index 0 is 2, index 99 is the 100th prime
//! assert_eq!(sieve.nth::<u64>(0)?, 2u64);
//! assert_eq!(sieve.nth::<u64>(99)?, 541u64);
//! # Result::<(), SieveError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! let sieve = Sieve::new()
//!     .segment_size(1 << 16)  // Segment width for the windowed sieve
//!     .execution(Parallel)    // Fan segments out across the worker pool
//!     .max_rebounds(4)        // Retry budget for an insufficient bound
//!     .growth_factor(2.0)     // Bound multiplier per retry
//!     .build()?;
//!
//! let report = sieve.nth_report::<u64>(999)?;
//! assert_eq!(report.prime, 7919);
//! # Result::<(), SieveError>::Ok(())
//! ```
//!
//! ### Query Reports
//!
//! `nth_report` returns the answer together with the search bound and
//! orchestration metadata, with a human-readable `Display`:
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! let report = Sieve::new().build()?.nth_report::<u64>(99)?;
//! println!("{report}");
//! # Result::<(), SieveError>::Ok(())
//! ```
//!
//! ```text
//! Nth Prime Summary:
//!   Index (0-based): 99
//!   Prime:           541
//!   Search bound:    605
//!   Primes sieved:   110
//!   Base primes:     9
//!   Segments:        1
//!   Rebounds:        0
//!   Execution:       Sequential
//! ```
//!
//! ### Result and Error Handling
//!
//! Query methods return a `Result<_, SieveError>`; the `?` operator is
//! idiomatic, but you can also handle failures explicitly:
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! match nth_prime(-1) {
//!     Ok(prime) => println!("found {prime}"),
//!     Err(e) => eprintln!("query failed: {e}"),
//! }
//! ```
//!
//! ### Prime Type Selection
//!
//! Query methods are generic over unsigned integer types. A query fails with
//! `BoundOverflow`, before any sieving work, when the estimated search
//! bound does not fit the requested type:
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! let sieve = Sieve::new().build()?;
//! let small: u32 = sieve.nth(9)?;
//! assert_eq!(small, 29);
//! # Result::<(), SieveError>::Ok(())
//! ```
//!
//! ### Prime Sequences
//!
//! The orchestrated ascending sequence is available directly:
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! let sieve = Sieve::new().build()?;
//! let primes = sieve.primes_up_to(50);
//! assert_eq!(primes.len(), 15);
//! assert_eq!(primes.first(), Some(&2));
//! # Result::<(), SieveError>::Ok(())
//! ```

// Layer 1: Primitives - errors, execution mode, segment partitioning.
mod primitives;

// Layer 2: Math - bound estimation and integer square root.
mod math;

// Layer 3: Algorithms - base sieve and segment sieve.
mod algorithms;

// Layer 4: Engine - orchestration, validation, output report.
mod engine;

// High-level fluent API for n-th prime queries.
mod api;

// Standard nthprime prelude.
pub mod prelude {
    pub use crate::api::{
        ExecutionMode,
        ExecutionMode::{Parallel, Sequential},
        NthPrimeResult, PrimeSieve, SegmentedSieve, SieveBuilder as Sieve, SieveError, nth_prime,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
