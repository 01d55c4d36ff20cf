//! Windowed sieving of one segment.
//!
//! ## Purpose
//!
//! This module strikes composites inside a single inclusive range
//! `[low, high]` using a shared, precomputed base-prime set, keeping memory
//! proportional to the segment width rather than the full search bound.
//! Every composite in the segment has a factor no larger than the square
//! root of the full bound, so the base primes are all the sieve needs.
//!
//! ## Design notes
//!
//! * **Candidate map**: one boolean per offset from `low`, `true` until the
//!   value is disproved. The map is owned by the caller's segment computation
//!   and dropped as soon as the survivors are extracted.
//! * **Strike start**: for each base prime p, striking begins at the larger
//!   of p² and the first multiple of p at or above `low`. The p² floor keeps
//!   the function correct even when the segment overlaps the base range
//!   (p itself is never struck); multiples below p² are composites of a
//!   smaller prime and are struck by it instead.
//! * **Low edge**: 0 and 1 are pre-cleared when the segment contains them,
//!   which only happens for a segment abutting the base range.
//!
//! ## Invariants
//!
//! * `low <= high` (enforced by the orchestrator's partitioning).
//! * The result is ascending and exactly the primes in `[low, high]`,
//!   provided the base primes cover `[2, integer_sqrt(high)]`.
//!
//! ## Non-goals
//!
//! * This module does not choose segment boundaries (see `engine::executor`).
//! * This module does not compute base primes (see `eratosthenes`).

/// Collect all primes in `[low, high]`, ascending, striking with `base_primes`.
pub fn sieve_segment(low: usize, high: usize, base_primes: &[usize]) -> Vec<usize> {
    debug_assert!(low <= high, "segment bounds out of order");

    let width = high - low + 1;
    let mut is_candidate = vec![true; width];

    // 0 and 1 are never prime; only the segment abutting the base range can
    // contain them.
    for value in 0..2usize {
        if value >= low && value <= high {
            is_candidate[value - low] = false;
        }
    }

    for &p in base_primes {
        let first_in_range = low.div_ceil(p) * p;
        let mut multiple = usize::max(first_in_range, p * p);
        while multiple <= high {
            is_candidate[multiple - low] = false;
            multiple += p;
        }
    }

    is_candidate
        .iter()
        .enumerate()
        .filter_map(|(offset, &candidate)| candidate.then_some(low + offset))
        .collect()
}
