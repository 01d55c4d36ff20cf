//! Classic Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module produces every prime in `[2, limit]` by striking multiples of
//! each prime found. It is the "base sieve": the orchestrator only runs it up
//! to the square root of the full search bound, and the resulting primes are
//! shared read-only with every segment.
//!
//! ## Design notes
//!
//! * **Striking starts at i²**: multiples of i below i² were already struck
//!   by a smaller factor.
//! * **Complexity**: O(limit log log limit) time, O(limit) space. Acceptable
//!   only because limit is the square root of the full bound; sieving the
//!   full bound this way would cost O(L) memory, which is what the segment
//!   sieve avoids.
//!
//! ## Invariants
//!
//! * The result is ascending, duplicate-free, and complete over `[2, limit]`.
//!
//! ## Non-goals
//!
//! * This module does not handle windowed ranges (see `segmented`).

/// Collect all primes in `[2, limit]`, ascending.
pub fn simple_sieve(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let mut is_candidate = vec![true; limit + 1];
    is_candidate[0] = false;
    is_candidate[1] = false;

    let mut i = 2;
    while i * i <= limit {
        if is_candidate[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                is_candidate[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }

    is_candidate
        .iter()
        .enumerate()
        .filter_map(|(value, &candidate)| candidate.then_some(value))
        .collect()
}
