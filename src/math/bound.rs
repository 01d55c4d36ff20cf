//! Search-bound estimation for the n-th prime.
//!
//! ## Purpose
//!
//! This module computes an inclusive upper limit guaranteed to contain the
//! n-th prime, so the sieve never has to guess how far to search. It also
//! provides the growth step used when a bound turns out to be insufficient,
//! and the exact integer square root that derives the base-prime limit.
//!
//! ## Design notes
//!
//! * **Asymptotic bound**: `n * (ln n + ln ln n)` bounds the n-th prime for
//!   1-based n >= 6 (Rosser's theorem, a consequence of the prime number
//!   theorem). Truncation toward zero when casting is acceptable: the bound
//!   only needs to be close, not tight.
//! * **Estimate, not guarantee**: applied to the 0-based index, the truncated
//!   formula undershoots the target prime for a handful of small indices
//!   (6 through 12). The selector never trusts the estimate blindly: it
//!   checks how many primes the sieve produced and grows the bound via
//!   `grow_bound` when the count falls short.
//! * **Small indices**: The formula is unusable below n = 6, where a fixed
//!   constant large enough to contain the first six primes is returned.
//! * **Total**: `upper_bound` has no error conditions; the caller validates
//!   index sign before converting to `usize`.
//!
//! ## Invariants
//!
//! * `upper_bound(n)` is within a single default growth step of sufficiency
//!   for every n; it is exactly sufficient for n < 6 and n >= 13.
//! * `grow_bound` always returns a strictly larger bound.
//! * `integer_sqrt(n)^2 <= n < (integer_sqrt(n) + 1)^2`.
//!
//! ## Non-goals
//!
//! * This module does not sieve or test primality.

/// Fixed bound for indices below [`SMALL_INDEX_CUTOFF`]; large enough to
/// contain the first six primes (2, 3, 5, 7, 11, 13).
pub const SMALL_INDEX_BOUND: u64 = 15;

/// Smallest index for which the asymptotic formula is known to hold.
pub const SMALL_INDEX_CUTOFF: usize = 6;

// ============================================================================
// Bound Estimation
// ============================================================================

/// Estimate an inclusive upper limit for the n-th prime (0-indexed).
///
/// The estimate can fall a few percent short for indices 6 through 12;
/// callers must verify the sieved prime count and rebound on a shortfall.
pub fn upper_bound(n: usize) -> u64 {
    if n < SMALL_INDEX_CUTOFF {
        return SMALL_INDEX_BOUND;
    }

    let nf = n as f64;
    let ln = nf.ln();
    let ln_ln = ln.ln();
    (nf * (ln + ln_ln)) as u64
}

/// Grow an insufficient bound by `factor`, guaranteeing strict progress.
///
/// The caller validates that `factor` is finite and greater than 1; the
/// `max(bound + 1)` guard only covers rounding at very small bounds.
pub fn grow_bound(bound: u64, factor: f64) -> u64 {
    let grown = (bound as f64 * factor) as u64;
    grown.max(bound + 1)
}

// ============================================================================
// Integer Square Root
// ============================================================================

/// Exact floor square root of `n`.
///
/// Seeds from floating-point `sqrt` and corrects the result, so the answer
/// is exact even where f64 rounding misplaces the seed.
pub fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root > 0 && root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
