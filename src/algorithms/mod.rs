//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core sieving algorithms:
//! - The classic Sieve of Eratosthenes over a full range (base sieve)
//! - The windowed segment sieve that strikes composites in `[low, high]`
//!   using a precomputed base-prime set
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Classic Sieve of Eratosthenes (base sieve).
pub mod eratosthenes;

/// Windowed sieving of one segment against shared base primes.
pub mod segmented;
