//! Tests for the high-level nthprime API.
//!
//! These tests verify the builder pattern, configuration options, and
//! complete query workflows including:
//! - Known prime values and 0-based indexing
//! - Ordering and primality properties
//! - Builder validation and error handling
//! - Prime type selection and capacity checks
//! - The rebound retry path
//! - The PrimeSieve capability trait
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Exact results for well-known indices
//! 2. **Properties** - Monotonicity and primality
//! 3. **Validation** - Invalid input and configuration errors
//! 4. **Prime Types** - Generic output types and capacity checks
//! 5. **Rebound Path** - Recovery from an undersized bound
//! 6. **Reports** - Query report metadata and display
//! 7. **Capability Trait** - PrimeSieve as an object-safe seam

use nthprime::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Trial-division primality check, sufficient for spot checks.
fn is_prime(value: u64) -> bool {
    if value < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

// ============================================================================
// Known Values Tests
// ============================================================================

/// Test the first six primes, covered by the fixed small-index bound.
#[test]
fn test_first_six_primes() {
    let expected = [2u64, 3, 5, 7, 11, 13];
    for (index, &prime) in expected.iter().enumerate() {
        assert_eq!(
            nth_prime(index as i64).unwrap(),
            prime,
            "prime at index {index} should be {prime}"
        );
    }
}

/// Test known values across the formula domain.
#[test]
fn test_known_indices() {
    assert_eq!(nth_prime(6).unwrap(), 17);
    assert_eq!(nth_prime(9).unwrap(), 29);
    assert_eq!(nth_prime(99).unwrap(), 541, "100th prime should be 541");
    assert_eq!(nth_prime(999).unwrap(), 7919, "1000th prime should be 7919");
}

/// Test a larger index through a configured sieve.
#[test]
fn test_ten_thousandth_prime() {
    let sieve = Sieve::new().build().unwrap();
    assert_eq!(
        sieve.nth::<u64>(9_999).unwrap(),
        104_729,
        "10000th prime should be 104729"
    );
}

/// Test that the convenience function and a configured sieve agree.
#[test]
fn test_convenience_matches_builder() {
    let sieve = Sieve::new().build().unwrap();
    for index in [0, 5, 6, 42, 500] {
        assert_eq!(nth_prime(index).unwrap(), sieve.nth::<u64>(index).unwrap());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test strict monotonicity of the prime sequence.
#[test]
fn test_monotonicity() {
    let sieve = Sieve::new().build().unwrap();
    let mut previous = 0u64;
    for index in 0..200 {
        let prime = sieve.nth::<u64>(index).unwrap();
        assert!(
            prime > previous,
            "prime at index {index} ({prime}) should exceed its predecessor ({previous})"
        );
        previous = prime;
    }
}

/// Test that sampled outputs are actually prime.
#[test]
fn test_outputs_are_prime() {
    let sieve = Sieve::new().build().unwrap();
    for index in [0, 1, 7, 50, 123, 999, 5_000] {
        let prime = sieve.nth::<u64>(index).unwrap();
        assert!(is_prime(prime), "output {prime} at index {index} is composite");
    }
}

/// Test that primes_up_to returns an ascending, gap-free sequence.
#[test]
fn test_primes_up_to_sequence() {
    let sieve = Sieve::new().build().unwrap();

    let primes = sieve.primes_up_to(10_000);
    assert_eq!(primes.len(), 1_229, "pi(10^4) should be 1229");
    assert!(
        primes.windows(2).all(|pair| pair[0] < pair[1]),
        "sequence should be strictly ascending"
    );
    assert_eq!(primes.first(), Some(&2));
    assert_eq!(primes.last(), Some(&9_973));
}

/// Test primes_up_to at tiny limits.
#[test]
fn test_primes_up_to_tiny_limits() {
    let sieve = Sieve::new().build().unwrap();

    assert!(sieve.primes_up_to(0).is_empty());
    assert!(sieve.primes_up_to(1).is_empty());
    assert_eq!(sieve.primes_up_to(2), vec![2]);
    assert_eq!(sieve.primes_up_to(3), vec![2, 3]);
    assert_eq!(sieve.primes_up_to(10), vec![2, 3, 5, 7]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that a negative index fails before any sieving work.
#[test]
fn test_negative_index_rejected() {
    let result = nth_prime(-1);
    assert_eq!(
        result,
        Err(SieveError::InvalidIndex(-1)),
        "negative index should be rejected as InvalidIndex"
    );
}

/// Test that a zero segment size fails at build time.
#[test]
fn test_zero_segment_size_rejected() {
    let result = Sieve::new().segment_size(0).build();
    assert!(
        matches!(result, Err(SieveError::InvalidSegmentSize { got: 0, .. })),
        "segment_size 0 should be rejected"
    );
}

/// Test that growth factors at or below 1 fail at build time.
#[test]
fn test_invalid_growth_factor_rejected() {
    for factor in [1.0, 0.5, -2.0, f64::NAN, f64::INFINITY] {
        let result = Sieve::new().growth_factor(factor).build();
        assert!(
            matches!(result, Err(SieveError::InvalidGrowthFactor(_))),
            "growth factor {factor} should be rejected"
        );
    }
}

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let result = Sieve::new().segment_size(100).segment_size(200).build();
    assert_eq!(
        result.err(),
        Some(SieveError::DuplicateParameter {
            parameter: "segment_size"
        })
    );

    let result = Sieve::new()
        .execution(Sequential)
        .execution(Parallel)
        .build();
    assert_eq!(
        result.err(),
        Some(SieveError::DuplicateParameter {
            parameter: "execution"
        })
    );
}

/// Test that errors render a readable message.
#[test]
fn test_error_display() {
    let message = SieveError::InvalidIndex(-7).to_string();
    assert!(
        message.contains("-7"),
        "message should mention the rejected index: {message}"
    );
}

// ============================================================================
// Prime Type Tests
// ============================================================================

/// Test generic output types for indices whose bound fits.
#[test]
fn test_narrow_prime_types() {
    let sieve = Sieve::new().build().unwrap();

    let as_u32: u32 = sieve.nth(9).unwrap();
    assert_eq!(as_u32, 29);

    let as_u16: u16 = sieve.nth(99).unwrap();
    assert_eq!(as_u16, 541);

    let as_u8: u8 = sieve.nth(5).unwrap();
    assert_eq!(as_u8, 13);
}

/// Test that a bound beyond the prime type's capacity fails fast.
///
/// The estimated bound for index 2*10^8 exceeds u32::MAX, so the query must
/// fail with BoundOverflow before any sieving happens.
#[test]
fn test_bound_overflow_for_u32() {
    let sieve = Sieve::new().build().unwrap();
    let result = sieve.nth::<u32>(200_000_000);
    assert!(
        matches!(
            result,
            Err(SieveError::BoundOverflow {
                capacity, ..
            }) if capacity == u64::from(u32::MAX)
        ),
        "u32 query at index 2e8 should overflow the capacity check"
    );
}

// ============================================================================
// Rebound Path Tests
// ============================================================================

/// Test recovery from an artificially undersized initial bound.
///
/// Starting from bound 10 for index 50 (prime 233), doubling must reach a
/// sufficient bound at 320 after exactly five rebounds.
#[test]
fn test_rebound_recovers() {
    let sieve = Sieve::new()
        .growth_factor(2.0)
        .max_rebounds(10)
        .build()
        .unwrap();

    let report = sieve.nth_report_from::<u64>(50, 10).unwrap();
    assert_eq!(report.prime, 233);
    assert_eq!(report.rebounds, 5);
    assert!(report.rebounded());
}

/// Test that an exhausted rebound budget surfaces BoundExhausted.
#[test]
fn test_rebound_exhaustion() {
    let sieve = Sieve::new()
        .growth_factor(1.5)
        .max_rebounds(1)
        .build()
        .unwrap();

    let result = sieve.nth_report_from::<u64>(50, 10);
    assert_eq!(
        result.err(),
        Some(SieveError::BoundExhausted {
            index: 50,
            bound: 15,
            primes_found: 6,
            attempts: 2,
        })
    );
}

// ============================================================================
// Report Tests
// ============================================================================

/// Test report metadata for a known query.
#[test]
fn test_report_metadata() {
    let sieve = Sieve::new().build().unwrap();
    let report = sieve.nth_report::<u64>(99).unwrap();

    assert_eq!(report.prime, 541);
    assert_eq!(report.index, 99);
    assert_eq!(report.bound, 605, "bound should be floor(99 * (ln 99 + ln ln 99))");
    assert_eq!(report.primes_found, 110, "pi(605) should be 110");
    assert_eq!(report.base_primes, 9, "pi(24) should be 9");
    assert_eq!(report.segments, 1);
    assert_eq!(report.rebounds, 0);
    assert!(!report.rebounded());
    assert!(report.primes_found > report.index as usize);
}

/// Test that the report renders the summary block.
#[test]
fn test_report_display() {
    let sieve = Sieve::new().build().unwrap();
    let report = sieve.nth_report::<u64>(9).unwrap();

    let rendered = report.to_string();
    assert!(rendered.contains("Nth Prime Summary:"));
    assert!(rendered.contains("Prime:           29"));
    assert!(rendered.contains("Execution:       Sequential"));
}

// ============================================================================
// Capability Trait Tests
// ============================================================================

/// Test PrimeSieve through a trait object.
#[test]
fn test_prime_sieve_trait_object() {
    let sieve: Box<dyn PrimeSieve> = Box::new(Sieve::new().build().unwrap());
    assert_eq!(sieve.nth_prime(0).unwrap(), 2);
    assert_eq!(sieve.nth_prime(999).unwrap(), 7_919);
    assert_eq!(sieve.nth_prime(-3), Err(SieveError::InvalidIndex(-3)));
}
