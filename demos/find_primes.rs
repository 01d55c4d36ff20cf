//! nthprime Query Examples
//!
//! This example demonstrates the main entry points:
//! - One-off queries via the convenience function
//! - Configured sieves with parallel segment processing
//! - Query reports with orchestration metadata
//! - Prime sequences up to a limit

use nthprime::prelude::*;
use std::time::Instant;

fn main() -> Result<(), SieveError> {
    println!("{}", "=".repeat(80));
    println!("nthprime Query Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_convenience()?;
    example_2_parallel_query()?;
    example_3_query_report()?;
    example_4_prime_sequence()?;

    Ok(())
}

/// Example 1: Convenience Function
/// One-off queries with default configuration
fn example_1_convenience() -> Result<(), SieveError> {
    println!("Example 1: Convenience Function");
    println!("{}", "-".repeat(80));

    for index in [0, 1, 9, 99, 999] {
        println!("prime #{index} = {}", nth_prime(index)?);
    }

    println!();
    Ok(())
}

/// Example 2: Parallel Query
/// Large index with segments fanned out across the worker pool
fn example_2_parallel_query() -> Result<(), SieveError> {
    println!("Example 2: Parallel Query");
    println!("{}", "-".repeat(80));

    let sieve = Sieve::new()
        .segment_size(1 << 18) // Wider segments for a large range
        .execution(Parallel)
        .build()?;

    let index = 1_000_000;
    let start = Instant::now();
    let prime: u64 = sieve.nth(index)?;
    let duration = start.elapsed();

    println!("prime #{index} = {prime} (computed in {duration:?})");

    println!();
    Ok(())
}

/// Example 3: Query Report
/// Full report with search bound and orchestration metadata
fn example_3_query_report() -> Result<(), SieveError> {
    println!("Example 3: Query Report");
    println!("{}", "-".repeat(80));

    let sieve = Sieve::new().build()?;
    let report = sieve.nth_report::<u64>(9_999)?;

    println!("{report}");

    println!();
    Ok(())
}

/// Example 4: Prime Sequence
/// Every prime up to a caller-supplied limit
fn example_4_prime_sequence() -> Result<(), SieveError> {
    println!("Example 4: Prime Sequence");
    println!("{}", "-".repeat(80));

    let sieve = Sieve::new().build()?;
    let primes = sieve.primes_up_to(100);

    println!("{} primes up to 100:", primes.len());
    println!("{primes:?}");

    println!();
    Ok(())
}
