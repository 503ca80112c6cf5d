//! Shared helpers for minwit benchmark suites.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use minwit_kernel::oracle::{Existence, FnOracle};
use minwit_search::minimal::{minimal_witness, MinimalWitness};

/// A predicate whose first witness sits exactly at `distance`.
///
/// Used to parameterize scan benchmarks by search distance.
#[must_use]
pub fn threshold_oracle(distance: u64) -> FnOracle<impl Fn(u64) -> bool> {
    FnOracle::new(move |n| n >= distance)
}

/// Run the full extraction pipeline for a threshold predicate.
///
/// # Panics
///
/// Panics if the existence fact fails verification. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn extract_threshold_witness(distance: u64) -> MinimalWitness {
    let oracle = threshold_oracle(distance);
    let fact = match Existence::verified(&oracle, distance) {
        Ok(fact) => fact,
        Err(e) => panic!("benchmark fact must verify: {e}"),
    };
    minimal_witness(&oracle, &fact)
}
